//! Compiled patterns shared by the normalizer and the field cascade.
//!
//! The phone pattern exists in two widths: the normalizer strips any 7–11 digit
//! run from a name, while the `ContactNo` field only accepts 10–11 digits.
//! Keep them separate.

use once_cell::sync::Lazy;
use regex::Regex;

pub static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\w.-]+@[\w.-]+").expect("email pattern is valid"));

/// Phone-shaped run stripped from names (7–11 digits).
pub static PHONE_LOOSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\+92|0)?[0-9]{7,11}").expect("loose phone pattern is valid"));

/// Contact number accepted as the `ContactNo` field (10–11 digits).
pub static PHONE_CONTACT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\+92|0)?[0-9]{10,11}").expect("contact pattern is valid"));

pub static CNIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{5}-\d{7}-\d").expect("cnic pattern is valid"));

/// Label followed by the rest of its line. `\s*` may step over a line break
/// directly after the label; `.` never does. CRLF mode keeps a trailing `\r`
/// out of the value.
pub static SKILLS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?iR)(Skills|Technical Skills|Key Skills)[:\-]?\s*(.+)")
        .expect("skills pattern is valid")
});

/// Two to four capitalized words making up a whole line.
pub static CAPITALIZED_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Z][a-z]+(?:\s[A-Z][a-z]+){1,3})$").expect("name pattern is valid")
});

pub static RESUME_HEADING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(curriculum vitae|resume)").expect("heading pattern is valid")
});
