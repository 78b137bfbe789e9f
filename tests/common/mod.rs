//! Shared fixtures and helpers for integration tests.

/// Candidate list the filtering behavior is calibrated against.
pub const HEROES: [&str; 10] = [
    "Green Lantern",
    "Sinestro",
    "Batman",
    "Joker",
    "Flash",
    "Captain Cold",
    "Superman",
    "Lex Luthor",
    "Wonder Woman",
    "Ares",
];

/// Larger, all-uppercase roster for cap and ordering tests.
pub const ROSTER: [&str; 50] = [
    "GREEN LANTERN",
    "FLASH",
    "BATMAN",
    "AQUAMAN",
    "SUPERMAN",
    "DR. MANHATTAN",
    "ROBIN",
    "LEX LUTHOR",
    "JOKER",
    "GREEN ARROW",
    "BATWOMAN",
    "SUPERGIRL",
    "BATGIRL",
    "DARKSEID",
    "ALFRED PENNYWORTH",
    "SINESTRO",
    "SAINT WALKER",
    "WONDER WOMAN",
    "POWER GIRL",
    "DEATHSTROKE",
    "LOIS LANE",
    "GANTHET",
    "JAMES GORDON",
    "TWO FACE",
    "SCARECROW",
    "STAR SAPPHIRE",
    "RA'S AL GHUL",
    "BLUE BEETLE",
    "LARFLEEZE",
    "ALAN SCOTT",
    "ATROCITUS",
    "HARLEY QUINN",
    "BLACK CANARY",
    "POISON IVY",
    "BANE",
    "BIZARRO",
    "CAPTAIN COLD",
    "MERA",
    "STARFIRE",
    "CATWOMAN",
    "PENGUIN",
    "KILLER CROC",
    "KILOWOG",
    "ARKILLO",
    "GUY GARDNER",
    "JOHN STEWART",
    "KYLE RAYNER",
    "HAL JORDAN",
    "SIMON BAZ",
    "JESSICA CRUZ",
];

/// Install a test subscriber so trace output from the engine is captured
/// per test. Safe to call from every test; only the first call wins.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}
