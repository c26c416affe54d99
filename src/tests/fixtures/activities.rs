// Shared test fixture for activity records.

use crate::modules::activities::core::activity::Activity;

pub struct ActivityBuilder {
    inner: Activity,
}

impl Default for ActivityBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ActivityBuilder {
    pub fn new() -> Self {
        Self {
            inner: Activity {
                description: "Learn strategies and compete in chess tournaments".to_string(),
                schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
                max_participants: 12,
                participants: vec![
                    "michael@mergington.edu".to_string(),
                    "daniel@mergington.edu".to_string(),
                ],
            },
        }
    }

    pub fn basketball() -> Self {
        Self::new()
            .description("Join our basketball team and compete in interschool tournaments")
            .schedule("Tuesdays and Thursdays, 4:00 PM - 6:00 PM")
            .max_participants(15)
            .participants(vec![
                "alex@mergington.edu".to_string(),
                "sarah@mergington.edu".to_string(),
            ])
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = v.into();
        self
    }

    pub fn schedule(mut self, v: impl Into<String>) -> Self {
        self.inner.schedule = v.into();
        self
    }

    pub fn max_participants(mut self, v: u32) -> Self {
        self.inner.max_participants = v;
        self
    }

    pub fn participants(mut self, v: Vec<String>) -> Self {
        self.inner.participants = v;
        self
    }

    pub fn build(self) -> Activity {
        self.inner
    }
}
