//! Word lists backing the synthetic profile generator, one set per locale.

/// Static vocabulary for one locale
pub(crate) struct Vocabulary {
    pub male_first_names: &'static [&'static str],
    pub female_first_names: &'static [&'static str],
    pub last_names: &'static [&'static str],
    pub jobs: &'static [&'static str],
    pub company_suffixes: &'static [&'static str],
    pub street_suffixes: &'static [&'static str],
    pub cities: &'static [&'static str],
    pub regions: &'static [&'static str],
    pub free_email_domains: &'static [&'static str],
    pub tlds: &'static [&'static str],
}

pub(crate) static EN_US: Vocabulary = Vocabulary {
    male_first_names: &[
        "James", "John", "Robert", "Michael", "William", "David", "Richard", "Joseph", "Thomas",
        "Charles", "Christopher", "Daniel", "Matthew", "Anthony", "Mark", "Donald", "Steven",
        "Paul", "Andrew", "Joshua", "Kenneth", "Kevin", "Brian", "George", "Timothy", "Ronald",
        "Jason", "Edward", "Jeffrey", "Ryan",
    ],
    female_first_names: &[
        "Mary", "Patricia", "Jennifer", "Linda", "Elizabeth", "Barbara", "Susan", "Jessica",
        "Sarah", "Karen", "Lisa", "Nancy", "Betty", "Margaret", "Sandra", "Ashley", "Kimberly",
        "Emily", "Donna", "Michelle", "Carol", "Amanda", "Melissa", "Deborah", "Stephanie",
        "Rebecca", "Sharon", "Laura", "Cynthia", "Kathleen",
    ],
    last_names: &[
        "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
        "Rodriguez", "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson",
        "Thomas", "Taylor", "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White",
        "Harris", "Sanchez", "Clark", "Ramirez", "Lewis", "Robinson",
    ],
    jobs: &[
        "Accountant", "Architect", "Biomedical engineer", "Civil engineer", "Data scientist",
        "Dentist", "Electrician", "Financial adviser", "Geologist", "Graphic designer",
        "Historian", "Journalist", "Librarian", "Mechanical engineer", "Nurse",
        "Occupational therapist", "Paramedic", "Pharmacist", "Physicist", "Pilot",
        "Psychologist", "Radiographer", "Software engineer", "Statistician", "Surveyor",
        "Teacher", "Translator", "Veterinary surgeon", "Web designer", "Zoologist",
    ],
    company_suffixes: &["Inc", "LLC", "Group", "PLC", "and Sons", "Ltd"],
    street_suffixes: &[
        "Street", "Avenue", "Road", "Lane", "Drive", "Court", "Place", "Boulevard", "Way",
        "Terrace",
    ],
    cities: &[
        "Springfield", "Riverside", "Franklin", "Greenville", "Bristol", "Clinton", "Fairview",
        "Salem", "Madison", "Georgetown", "Arlington", "Ashland", "Dover", "Oxford", "Jackson",
    ],
    regions: &[
        "AL", "AK", "AZ", "CA", "CO", "FL", "GA", "IL", "MA", "MI", "NY", "OH", "OR", "PA",
        "TX", "WA",
    ],
    free_email_domains: &["gmail.com", "yahoo.com", "hotmail.com"],
    tlds: &["com", "net", "org", "info", "biz"],
};

pub(crate) static EN_GB: Vocabulary = Vocabulary {
    male_first_names: &[
        "Oliver", "George", "Harry", "Jack", "Jacob", "Noah", "Charlie", "Thomas", "Oscar",
        "William", "James", "Leo", "Alfie", "Henry", "Joshua", "Freddie", "Archie", "Ethan",
        "Isaac", "Alexander", "Joseph", "Edward", "Samuel", "Max", "Daniel", "Arthur", "Lucas",
        "Mohammed", "Logan", "Theo",
    ],
    female_first_names: &[
        "Olivia", "Amelia", "Isla", "Ava", "Emily", "Isabella", "Mia", "Poppy", "Ella", "Lily",
        "Jessica", "Sophie", "Grace", "Evie", "Ruby", "Sophia", "Freya", "Chloe", "Charlotte",
        "Daisy", "Phoebe", "Florence", "Alice", "Evelyn", "Sienna", "Matilda", "Harriet",
        "Imogen", "Eleanor", "Rosie",
    ],
    last_names: &[
        "Smith", "Jones", "Taylor", "Brown", "Williams", "Wilson", "Johnson", "Davies",
        "Robinson", "Wright", "Thompson", "Evans", "Walker", "White", "Roberts", "Green",
        "Hall", "Wood", "Jackson", "Clarke", "Patel", "Khan", "Lewis", "James", "Phillips",
        "Mason", "Mitchell", "Rose", "Davis", "Rodgers",
    ],
    jobs: &[
        "Accountant, chartered", "Barrister", "Building surveyor", "Civil Service fast streamer",
        "Community pharmacist", "Conservation officer", "Dispensing optician",
        "Estate agent", "Firefighter", "General practice doctor", "Geophysicist",
        "Health visitor", "Horticulturist", "Hydrologist", "Land agent", "Lecturer, further education",
        "Midwife", "Museum curator", "Patent attorney", "Police officer", "Quantity surveyor",
        "Sales executive", "Secondary school teacher", "Solicitor", "Sound technician",
        "Town planner", "Tree surgeon", "Veterinary surgeon", "Web developer", "Youth worker",
    ],
    company_suffixes: &["Ltd", "PLC", "and Sons", "Group", "LLP"],
    street_suffixes: &[
        "Street", "Road", "Lane", "Close", "Crescent", "Gardens", "Grove", "Mews", "Row",
        "Square",
    ],
    cities: &[
        "Bradford", "Brighton", "Cambridge", "Carlisle", "Chester", "Derby", "Exeter",
        "Gloucester", "Leeds", "Lincoln", "Norwich", "Oxford", "Plymouth", "Sheffield", "York",
    ],
    regions: &[
        "AB", "B", "BS", "CB", "DE", "EX", "GL", "LN", "LS", "NR", "OX", "PL", "S", "YO",
    ],
    free_email_domains: &["gmail.com", "hotmail.co.uk", "yahoo.co.uk"],
    tlds: &["co.uk", "com", "org", "net", "info"],
};
