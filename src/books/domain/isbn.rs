use std::fmt;
use std::fmt::{Display, Formatter};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SEPARATORS: Regex = Regex::new(r"[-\s]").expect("valid separator pattern");
    static ref ISBN_10: Regex = Regex::new(r"^[0-9]{9}[0-9X]$").expect("valid isbn-10 pattern");
    static ref ISBN_13: Regex = Regex::new(r"^[0-9]{13}$").expect("valid isbn-13 pattern");
}

// IsbnError classifies why a candidate ISBN was rejected. Every variant keeps the
// raw input as it was supplied, before separators were stripped.
#[derive(Debug, Clone, PartialEq)]
pub enum IsbnError {
    InvalidLength {
        isbn: String,
        message: String,
    },
    InvalidFormat {
        isbn: String,
        message: String,
    },
    InvalidCheckDigit {
        isbn: String,
        message: String,
    },
}

impl IsbnError {
    pub fn invalid_length(isbn: &str, message: &str) -> IsbnError {
        IsbnError::InvalidLength { isbn: isbn.to_string(), message: message.to_string() }
    }

    pub fn invalid_format(isbn: &str, message: &str) -> IsbnError {
        IsbnError::InvalidFormat { isbn: isbn.to_string(), message: message.to_string() }
    }

    pub fn invalid_check_digit(isbn: &str, message: &str) -> IsbnError {
        IsbnError::InvalidCheckDigit { isbn: isbn.to_string(), message: message.to_string() }
    }

    pub fn isbn(&self) -> &str {
        match self {
            IsbnError::InvalidLength { isbn, .. } => { isbn }
            IsbnError::InvalidFormat { isbn, .. } => { isbn }
            IsbnError::InvalidCheckDigit { isbn, .. } => { isbn }
        }
    }

    pub fn message(&self) -> &str {
        match self {
            IsbnError::InvalidLength { message, .. } => { message }
            IsbnError::InvalidFormat { message, .. } => { message }
            IsbnError::InvalidCheckDigit { message, .. } => { message }
        }
    }

    pub fn reason_code(&self) -> String {
        match self {
            IsbnError::InvalidLength { .. } => "InvalidLength".to_string(),
            IsbnError::InvalidFormat { .. } => "InvalidFormat".to_string(),
            IsbnError::InvalidCheckDigit { .. } => "InvalidCheckDigit".to_string(),
        }
    }
}

impl Display for IsbnError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:?}", self.message(), self.isbn())
    }
}

/// Checks a candidate ISBN-10 or ISBN-13 and hands back the input unchanged.
///
/// Hyphens and whitespace are ignored when measuring and checking the number, but
/// the returned value keeps the caller's formatting.
pub fn validate(isbn: &str) -> Result<&str, IsbnError> {
    let normalized = SEPARATORS.replace_all(isbn, "");
    match normalized.chars().count() {
        10 => validate_isbn10(isbn, &normalized)?,
        13 => validate_isbn13(isbn, &normalized)?,
        _ => return Err(IsbnError::invalid_length(isbn, "ISBN must be 10 or 13 digits")),
    }
    Ok(isbn)
}

/// Validates a batch of candidates without touching any catalog state.
pub fn validate_all<'a>(isbns: &[&'a str]) -> Vec<Result<&'a str, IsbnError>> {
    isbns.iter().copied().map(validate).collect()
}

fn validate_isbn10(isbn: &str, normalized: &str) -> Result<(), IsbnError> {
    if !ISBN_10.is_match(normalized) {
        return Err(IsbnError::invalid_format(isbn, "Invalid ISBN-10 format"));
    }
    let digits = normalized.as_bytes();
    let checksum: u32 = digits[..9].iter().enumerate()
        .map(|(i, d)| u32::from(d - b'0') * (10 - i as u32))
        .sum();
    let expected = match (11 - checksum % 11) % 11 {
        10 => b'X',
        n => b'0' + n as u8,
    };
    if digits[9] != expected {
        return Err(IsbnError::invalid_check_digit(isbn, "Invalid ISBN-10 check digit"));
    }
    Ok(())
}

fn validate_isbn13(isbn: &str, normalized: &str) -> Result<(), IsbnError> {
    if !ISBN_13.is_match(normalized) {
        return Err(IsbnError::invalid_format(isbn, "Invalid ISBN-13 format"));
    }
    let digits = normalized.as_bytes();
    let checksum: u32 = digits[..12].iter().enumerate()
        .map(|(i, d)| u32::from(d - b'0') * if i % 2 == 0 { 1 } else { 3 })
        .sum();
    let expected = (10 - checksum % 10) % 10;
    if u32::from(digits[12] - b'0') != expected {
        return Err(IsbnError::invalid_check_digit(isbn, "Invalid ISBN-13 check digit"));
    }
    Ok(())
}
