use crate::models::NewActivity;

// Loaded into a fresh registry on every start.
pub const SEED_ACTIVITIES: &[NewActivity<'static>] = &[
    NewActivity {
        name: "Basketball",
        description: "Team basketball practice and friendly matches",
        schedule: "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        max_participants: 15,
        participants: &["james@mergington.edu"],
    },
    NewActivity {
        name: "Tennis Club",
        description: "Tennis skills development and tournaments",
        schedule: "Tuesdays and Thursdays, 4:00 PM - 5:00 PM",
        max_participants: 10,
        participants: &["alex@mergington.edu"],
    },
    NewActivity {
        name: "Art Studio",
        description: "Painting, drawing, and mixed media art",
        schedule: "Wednesdays, 3:30 PM - 5:00 PM",
        max_participants: 18,
        participants: &["mia@mergington.edu"],
    },
    NewActivity {
        name: "Drama Club",
        description: "Theater, acting, and stage performance",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 25,
        participants: &["lucas@mergington.edu", "ava@mergington.edu"],
    },
    NewActivity {
        name: "Debate Team",
        description: "Develop argumentation and public speaking skills",
        schedule: "Mondays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 16,
        participants: &["noah@mergington.edu"],
    },
    NewActivity {
        name: "Science Club",
        description: "Explore experiments and scientific discoveries",
        schedule: "Tuesdays, 3:30 PM - 5:00 PM",
        max_participants: 22,
        participants: &["isabella@mergington.edu", "ethan@mergington.edu"],
    },
    NewActivity {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: &["michael@mergington.edu", "daniel@mergington.edu"],
    },
    NewActivity {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: &["emma@mergington.edu", "sophia@mergington.edu"],
    },
    NewActivity {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
        participants: &["john@mergington.edu", "olivia@mergington.edu"],
    },
];
