//! Static reference tables shown by the `contacts` command.

pub const EMERGENCY_CONTACTS: &[(&str, &str)] = &[
    ("Barangay Hall", "123-4567"),
    ("Police Station", "911"),
    ("Fire Department", "911"),
    ("Hospital Emergency", "911"),
    ("Rescue Services", "123-4567"),
];

pub const TIPS: &[&str] = &[
    "For minor garbage issues: Separate biodegradable from non-biodegradable waste",
    "Small potholes: Mark the area with visible objects to alert others while waiting for repair",
    "Streetlight issues: Note the exact location and pole number if available",
    "Drainage problems: Clear visible debris if safe to do so",
    "Graffiti: Document with photos for proper reporting",
];
