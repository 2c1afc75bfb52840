//! Built-in candidate pools.

/// Project names, one per generated record.
pub const PROJECT_NAMES: [&str; 20] = [
    "HBL",
    "UBL",
    "Bank Al Habib",
    "MCB",
    "Meezan Bank",
    "Allied Bank",
    "JS Bank",
    "Soneri Bank",
    "Faysal Bank",
    "Askari Bank",
    "Standard Chartered",
    "NBP",
    "Bank Islami",
    "Dubai Islamic Bank",
    "Silk Bank",
    "Summit Bank",
    "Samba Bank",
    "HabibMetro",
    "CitiBank",
    "HSBC",
];

/// People that can be assigned to projects.
pub const PERSON_NAMES: [&str; 32] = [
    "Ahmad", "Ali", "Ramzan", "Daud", "Sara", "Waqas", "Hamza", "Bilal", "Usman", "Ayesha",
    "Kamran", "Faraz", "Saad", "Zain", "Nida", "Farhan", "Nadia", "Imran", "Asad", "Hira",
    "Hassan", "Fatima", "Junaid", "Anum", "Yasir", "Mona", "Asim", "Shaista", "Shahbaz", "Huma",
    "Arif", "Rehan",
];

pub fn project_names() -> Vec<String> {
    PROJECT_NAMES.iter().map(ToString::to_string).collect()
}

pub fn person_names() -> Vec<String> {
    PERSON_NAMES.iter().map(ToString::to_string).collect()
}
