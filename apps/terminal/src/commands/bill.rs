//! # Bill Commands
//!
//! Amount entry, tip and people selection.
//!
//! Every handler either applies its change and reports the new per-person
//! total, or returns the error and leaves the session untouched.

use crate::error::AppError;
use crate::state::BillSession;

fn per_person_line(session: &BillSession) -> String {
    format!("Per person: {}", session.summary().per_person)
}

/// `amount <text>`
pub fn amount(session: &mut BillSession, text: &str) -> Result<String, AppError> {
    session.edit_amount(text)?;
    Ok(format!(
        "Amount: {}{}\n{}",
        session.currency_symbol(),
        session.amount_text(),
        per_person_line(session)
    ))
}

/// `type <keys>`
pub fn type_keys(session: &mut BillSession, keys: &str) -> Result<String, AppError> {
    let rejected = session.type_keys(keys)?;
    let mut out = format!("Amount: {}{}", session.currency_symbol(), session.amount_text());
    if rejected > 0 {
        out.push_str(&format!(" ({rejected} key(s) ignored)"));
    }
    out.push('\n');
    out.push_str(&per_person_line(session));
    Ok(out)
}

/// `back`
pub fn backspace(session: &mut BillSession) -> Result<String, AppError> {
    session.backspace()?;
    Ok(format!(
        "Amount: {}{}\n{}",
        session.currency_symbol(),
        session.amount_text(),
        per_person_line(session)
    ))
}

/// `clear`
pub fn clear(session: &mut BillSession) -> Result<String, AppError> {
    session.clear_amount()?;
    Ok(format!("Amount cleared\n{}", per_person_line(session)))
}

/// `tip <n>`
pub fn tip(session: &mut BillSession, value: u32) -> Result<String, AppError> {
    let tip = session.select_tip(value)?;
    Ok(format!("Tip: {tip}\n{}", per_person_line(session)))
}

/// `people <n>`
pub fn people(session: &mut BillSession, count: i64) -> Result<String, AppError> {
    let count = session.select_people(count)?;
    Ok(format!("People: {}\n{}", count.get(), per_person_line(session)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_amount_then_people() {
        let mut session = crate::tests::session();

        let out = amount(&mut session, "100").unwrap();
        assert_eq!(out, "Amount: $100\nPer person: $60.00");

        let out = people(&mut session, 4).unwrap();
        assert_eq!(out, "People: 4\nPer person: $30.00");
    }

    #[test]
    fn test_type_reports_ignored_keys() {
        let mut session = crate::tests::session();
        let out = type_keys(&mut session, "7a5").unwrap();
        assert_eq!(out, "Amount: $75 (1 key(s) ignored)\nPer person: $45.00");
    }

    #[test]
    fn test_tip_and_clear() {
        let mut session = crate::tests::session();
        amount(&mut session, "75.50").unwrap();

        assert_eq!(tip(&mut session, 25).unwrap(), "Tip: 25%\nPer person: $47.19");
        assert_eq!(clear(&mut session).unwrap(), "Amount cleared\nPer person: $0.00");
    }

    #[test]
    fn test_backspace() {
        let mut session = crate::tests::session();
        amount(&mut session, "10.5").unwrap();
        assert_eq!(backspace(&mut session).unwrap(), "Amount: $10.\nPer person: $6.00");
    }

    #[test]
    fn test_errors_pass_through() {
        let mut session = crate::tests::session();
        assert_eq!(people(&mut session, 150).unwrap_err().code, ErrorCode::OutOfRange);
        assert_eq!(amount(&mut session, "-5").unwrap_err().code, ErrorCode::ValidationError);
        assert_eq!(tip(&mut session, 12).unwrap_err().code, ErrorCode::ValidationError);
    }
}
