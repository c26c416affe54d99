// Built-in directory the service starts with when no seed file is configured.

use crate::modules::activities::core::activity::{Activities, Activity};

fn activity(
    description: &str,
    schedule: &str,
    max_participants: u32,
    participants: &[&str],
) -> Activity {
    Activity {
        description: description.to_string(),
        schedule: schedule.to_string(),
        max_participants,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

pub fn seed_activities() -> Activities {
    [
        (
            "Basketball",
            activity(
                "Join our basketball team and compete in interschool tournaments",
                "Tuesdays and Thursdays, 4:00 PM - 6:00 PM",
                15,
                &["alex@mergington.edu", "sarah@mergington.edu"],
            ),
        ),
        (
            "Swimming",
            activity(
                "Improve your swimming technique and build endurance",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                20,
                &["ryan@mergington.edu"],
            ),
        ),
        (
            "Drama Club",
            activity(
                "Develop acting skills and perform in school plays",
                "Wednesdays, 3:30 PM - 5:30 PM",
                25,
                &["isabella@mergington.edu", "noah@mergington.edu"],
            ),
        ),
        (
            "Art Studio",
            activity(
                "Explore various art mediums including painting, drawing, and sculpture",
                "Thursdays, 3:30 PM - 5:00 PM",
                15,
                &["mia@mergington.edu"],
            ),
        ),
        (
            "Debate Team",
            activity(
                "Develop critical thinking and public speaking through competitive debates",
                "Fridays, 4:00 PM - 6:00 PM",
                16,
                &["ethan@mergington.edu", "ava@mergington.edu"],
            ),
        ),
        (
            "Science Olympiad",
            activity(
                "Compete in science and engineering challenges at regional competitions",
                "Tuesdays, 3:30 PM - 5:00 PM",
                18,
                &["liam@mergington.edu"],
            ),
        ),
        (
            "Chess Club",
            activity(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        ),
        (
            "Programming Class",
            activity(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Gym Class",
            activity(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
    ]
    .into_iter()
    .map(|(name, activity)| (name.to_string(), activity))
    .collect()
}
