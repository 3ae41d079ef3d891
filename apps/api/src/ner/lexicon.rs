//! Word lists for the statistical tagger. All entries are lowercase.

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Capitalized words that are never part of a person name in a résumé:
/// section headings, field labels, titles, job words, calendar words and
/// sentence-initial function words.
const COMMON_WORDS: &[&str] = &[
    // headings and labels
    "about", "achievements", "activities", "address", "affiliations", "area", "areas", "awards",
    "birth", "career", "certifications", "certificate", "cnic", "contact", "courses", "curriculum",
    "date", "details", "domicile", "education", "email", "employment", "experience", "expertise",
    "father", "gender", "history", "hobbies", "information", "interests", "key", "languages",
    "linkedin", "marital", "mobile", "name", "nationality", "no", "objective", "overview", "page",
    "personal", "phone", "profile", "projects", "publications", "qualification", "qualifications",
    "references", "religion", "resume", "skills", "soft", "status", "summary", "technical", "tel",
    "training", "vitae", "website", "work",
    // honorifics
    "dr", "miss", "mr", "mrs", "ms", "prof", "sir",
    // job words
    "analyst", "assistant", "associate", "consultant", "designer", "developer", "director",
    "engineer", "executive", "intern", "junior", "lead", "lecturer", "manager", "officer",
    "principal", "senior", "software", "specialist", "student", "teacher",
    // résumé verbs
    "achieved", "built", "created", "designed", "developed", "implemented", "improved", "led",
    "managed", "responsible", "worked",
    // calendar
    "january", "february", "march", "april", "may", "june", "july", "august", "september",
    "october", "november", "december", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep",
    "sept", "oct", "nov", "dec", "monday", "tuesday", "wednesday", "thursday", "friday",
    "saturday", "sunday", "present", "current",
    // function words
    "a", "an", "and", "as", "at", "by", "dear", "for", "from", "he", "her", "his", "i", "in", "it",
    "my", "of", "on", "our", "she", "the", "their", "this", "to", "we", "with", "yes",
];

/// Trailing or leading words that make a span an organization.
const ORGANIZATION_MARKERS: &[&str] = &[
    "academy", "bank", "college", "company", "corp", "corporation", "foundation", "group", "inc",
    "institute", "limited", "llc", "ltd", "pvt", "school", "solutions", "systems",
    "technologies", "university",
];

const PLACES: &[&str] = &[
    "abbottabad", "bahawalpur", "balochistan", "dubai", "faisalabad", "gujranwala", "hyderabad",
    "islamabad", "karachi", "khyber", "lahore", "london", "multan", "pakhtunkhwa", "pakistan",
    "peshawar", "punjab", "quetta", "rawalpindi", "sargodha", "sialkot", "sindh", "sukkur",
];

const GIVEN_NAMES: &[&str] = &[
    "abdul", "abdullah", "adeel", "adnan", "ahmad", "ahmed", "aisha", "alex", "ali", "amir",
    "amna", "anna", "arslan", "asad", "asif", "ayesha", "bilal", "daniel", "danish", "david",
    "emily", "emma", "faisal", "farhan", "fatima", "hamza", "haris", "hassan", "hina", "hira",
    "hussain", "imran", "irfan", "james", "jane", "john", "junaid", "kamran", "laura", "maria",
    "mary", "maryam", "michael", "mohammad", "mohammed", "muhammad", "nadia", "naveed", "omar",
    "paul", "peter", "robert", "saad", "sadia", "sana", "sara", "sarah", "shahid", "sophia",
    "talha", "tariq", "thomas", "umar", "usman", "waqas", "william", "zainab", "zain",
];

/// Lowercased text immediately before a span that marks it as a name.
pub const PERSON_CUES: &[&str] = &[
    "name:", "name is", "name -", "i am", "i'm", "mr.", "mr", "mrs.", "mrs", "ms.", "ms", "dr.",
    "dr", "miss", "prepared by", "submitted by",
];

pub static COMMON: Lazy<HashSet<&'static str>> =
    Lazy::new(|| COMMON_WORDS.iter().copied().collect());

pub static ORGANIZATION: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ORGANIZATION_MARKERS.iter().copied().collect());

pub static PLACE: Lazy<HashSet<&'static str>> = Lazy::new(|| PLACES.iter().copied().collect());

pub fn builtin_given_names() -> impl Iterator<Item = &'static str> {
    GIVEN_NAMES.iter().copied()
}
