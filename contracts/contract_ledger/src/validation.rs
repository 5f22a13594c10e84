use crate::error::Error;
use crate::types::{DECIMALS, SCALE};
use soroban_sdk::{Bytes, Env, String};

/// Longest numeric or boolean argument accepted
pub const MAX_SCALAR_LEN: usize = 64;
/// Longest raw value accepted through the string surface
pub const MAX_RAW_VALUE_LEN: usize = 4096;

pub struct Validator;

impl Validator {
    pub fn require_non_empty(arg: &String) -> Result<(), Error> {
        if arg.len() == 0 {
            return Err(Error::EmptyField);
        }
        Ok(())
    }

    /// Non-negative decimal with at most 7 fractional digits, scaled by SCALE.
    ///
    /// Example: "1500.25" -> 15_002_500_000
    pub fn parse_amount(arg: &String) -> Result<i128, Error> {
        with_text(arg, |text| parse_fixed(text).ok_or(Error::InvalidNumber))
    }

    /// Integer-valued decimal ("12" or "12.0") that fits in u32.
    pub fn parse_count(arg: &String) -> Result<u32, Error> {
        let whole = Self::parse_whole(arg)?;
        u32::try_from(whole).map_err(|_| Error::InvalidNumber)
    }

    /// Integer-valued decimal that fits in u64.
    pub fn parse_user_id(arg: &String) -> Result<u64, Error> {
        let whole = Self::parse_whole(arg)?;
        u64::try_from(whole).map_err(|_| Error::InvalidNumber)
    }

    pub fn parse_bool(arg: &String) -> Result<bool, Error> {
        with_text(arg, |text| match text {
            "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
            "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
            _ => Err(Error::InvalidBool),
        })
    }

    /// Signed records carry a date, unsigned records carry none.
    pub fn check_signature(is_signed: bool, signed_date: &String) -> Result<(), Error> {
        if is_signed == (signed_date.len() == 0) {
            return Err(Error::InconsistentSignature);
        }
        Ok(())
    }

    pub fn to_bytes(env: &Env, arg: &String) -> Result<Bytes, Error> {
        let len = arg.len() as usize;
        if len > MAX_RAW_VALUE_LEN {
            return Err(Error::ArgumentTooLong);
        }
        let mut buf = [0u8; MAX_RAW_VALUE_LEN];
        arg.copy_into_slice(&mut buf[..len]);
        Ok(Bytes::from_slice(env, &buf[..len]))
    }

    fn parse_whole(arg: &String) -> Result<i128, Error> {
        let fixed = Self::parse_amount(arg)?;
        if fixed % SCALE != 0 {
            return Err(Error::InvalidNumber);
        }
        Ok(fixed / SCALE)
    }
}

/// Canonical ledger key for an assignee: the decimal user id.
pub fn user_key(env: &Env, user_id: u64) -> String {
    let mut buf = [0u8; 20];
    let mut pos = buf.len();
    let mut rest = user_id;
    loop {
        pos -= 1;
        buf[pos] = b'0' + (rest % 10) as u8;
        rest /= 10;
        if rest == 0 {
            break;
        }
    }
    String::from_bytes(env, &buf[pos..])
}

fn with_text<T>(arg: &String, parse: impl FnOnce(&str) -> Result<T, Error>) -> Result<T, Error> {
    let len = arg.len() as usize;
    if len > MAX_SCALAR_LEN {
        return Err(Error::ArgumentTooLong);
    }
    let mut buf = [0u8; MAX_SCALAR_LEN];
    arg.copy_into_slice(&mut buf[..len]);
    // Non-UTF-8 input cannot match any accepted spelling
    let text = core::str::from_utf8(&buf[..len]).unwrap_or("");
    parse(text)
}

fn parse_fixed(text: &str) -> Option<i128> {
    let (whole, frac) = text.split_once('.').unwrap_or((text, ""));
    if whole.is_empty() && frac.is_empty() {
        return None;
    }
    if frac.len() > DECIMALS {
        return None;
    }
    if !whole.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }

    let mut value: i128 = 0;
    for digit in whole.bytes() {
        value = value.checked_mul(10)?.checked_add(i128::from(digit - b'0'))?;
    }
    value = value.checked_mul(SCALE)?;

    let mut unit = SCALE;
    for digit in frac.bytes() {
        unit /= 10;
        value = value.checked_add(i128::from(digit - b'0') * unit)?;
    }
    Some(value)
}
