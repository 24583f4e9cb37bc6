use lazy_static::lazy_static;
use proptest::prelude::*;
use unicode_database::properties::CATEGORIES;
use unicode_database::{BidiClass, EastAsianWidth, GeneralCategory, NotFound, UnicodeDatabase};

lazy_static! {
    static ref DB: UnicodeDatabase<'static> = UnicodeDatabase::new();
}

#[test]
fn categories()
{
    assert_eq!(DB.category(0x41), "Lu");
    assert_eq!(DB.category(0x61), "Ll");
    assert_eq!(DB.category(0x1C5), "Lt");
    assert_eq!(DB.category(0x378), "Cn");
    assert_eq!(DB.category(0xD800), "Cs");
    assert_eq!(DB.category(0xE000), "Co");
    assert_eq!(DB.category(0xE0080), "Cn");
    assert_eq!(DB.category(0x10FFFF), "Cn");

    assert_eq!(DB.general_category(0x4E00), GeneralCategory::OtherLetter);
    assert_eq!(DB.general_category(0x0301), GeneralCategory::NonspacingMark);
    assert!(DB.general_category(0x2028).is_separator());
}

#[test]
fn bidirectional()
{
    assert_eq!(DB.bidirectional(0x41), "L");
    assert_eq!(DB.bidirectional(0x5D0), "R");
    assert_eq!(DB.bidirectional(0x627), "AL");
    assert_eq!(DB.bidirectional(0x660), "AN");
    assert_eq!(DB.bidirectional(0x202E), "RLO");

    // у неназначенного кодпоинта класса нет
    assert_eq!(DB.bidirectional(0x378), "");
    assert_eq!(DB.bidi_class(0x378), None);
    assert_eq!(DB.bidi_class(0x5D0), Some(BidiClass::RightToLeft));
}

#[test]
fn east_asian_width()
{
    assert_eq!(DB.east_asian_width(0x4E2D), "W");
    assert_eq!(DB.east_asian_width(0x41), "Na");
    assert_eq!(DB.east_asian_width(0xFF21), "F");
    assert_eq!(DB.east_asian_width(0xFF61), "H");
    assert_eq!(DB.east_asian_width(0xA1), "A");

    assert_eq!(DB.east_asian_width_value(0x4E2D), EastAsianWidth::Wide);
    assert!(DB.east_asian_width_value(0xFF21).is_wide());
}

#[test]
fn flags()
{
    assert!(DB.is_space(0x20));
    assert!(DB.is_space(0x3000));
    assert!(DB.is_space(0x85));
    assert!(!DB.is_space(0x200B));

    assert!(DB.is_linebreak(0x0A));
    assert!(DB.is_linebreak(0x2029));
    assert!(DB.is_linebreak(0x1C));
    assert!(!DB.is_linebreak(0x20));

    assert!(DB.is_alpha(0x41));
    assert!(!DB.is_alpha(0x216B));
    assert!(DB.is_alnum(0x216B));
    assert!(DB.is_alnum(0xBD));

    assert!(DB.is_upper(0x41));
    assert!(DB.is_lower(0x61));
    assert!(DB.is_title(0x1C5));
    assert!(!DB.is_upper(0x1C5));
    assert!(DB.is_cased(0x1C5));
    assert!(!DB.is_cased(0x4E00));

    assert!(DB.is_printable(0x20));
    assert!(!DB.is_printable(0xA0));
    assert!(!DB.is_printable(0x0A));

    assert!(DB.is_mirrored(0x28));
    assert!(!DB.is_mirrored(0x61));

    assert!(DB.is_xid_start(0x61));
    assert!(!DB.is_xid_start(0x31));
    assert!(DB.is_xid_continue(0x31));
    assert!(DB.is_case_ignorable(0x27));
    assert!(DB.is_case_ignorable(0x301));
}

#[test]
fn numbers()
{
    assert_eq!(DB.decimal(0x39), Ok(9));
    assert_eq!(DB.decimal(0x663), Ok(3));
    assert_eq!(DB.decimal(0xB2), Err(NotFound::Codepoint(0xB2)));

    assert_eq!(DB.digit(0xB2), Ok(2));
    assert_eq!(DB.digit(0x2460), Ok(1));
    assert_eq!(DB.digit(0x41), Err(NotFound::Codepoint(0x41)));

    assert_eq!(DB.numeric(0x4E00), Ok(1.0));
    assert_eq!(DB.numeric(0x842C), Ok(10000.0));
    assert_eq!(DB.numeric(0x2155), Ok(0.2));
    assert_eq!(DB.numeric(0x0F33), Ok(-0.5));
    assert_eq!(DB.numeric(0xBD), Ok(0.5));
    assert_eq!(DB.numeric(0x216B), Ok(12.0));
    assert_eq!(DB.numeric(0x41), Err(NotFound::Codepoint(0x41)));

    // ноль - тоже значение
    assert_eq!(DB.decimal(0x30), Ok(0));
    assert_eq!(DB.numeric(0x30), Ok(0.0));
}

#[test]
fn stats()
{
    let stats = DB.stats();

    assert_eq!(DB.version(), "14.0.0");
    assert!(stats.records > 1);
    assert!(stats.pages > 1);
    assert_eq!(stats.compositions, 941);
    assert_eq!(stats.names, 35458);
    assert_eq!(stats.aliases, 470);
    assert_eq!(stats.named_sequences, 461);
}

proptest! {
    #[test]
    fn numeric_implications(code in 0u32 .. 0x110000)
    {
        if DB.is_decimal(code) {
            prop_assert!(DB.is_digit(code));
            prop_assert!(DB.decimal(code).unwrap() <= 9);
            prop_assert_eq!(DB.decimal(code), DB.digit(code));
        } else {
            prop_assert!(DB.decimal(code).is_err());
        }

        if DB.is_digit(code) {
            prop_assert!(DB.is_numeric(code));
            prop_assert!(DB.digit(code).unwrap() <= 9);
        } else {
            prop_assert!(DB.digit(code).is_err());
        }

        prop_assert_eq!(DB.is_numeric(code), DB.numeric(code).is_ok());
    }

    #[test]
    fn category_is_known(code in 0u32 .. 0x110000)
    {
        let category = DB.category(code);

        prop_assert!(CATEGORIES.contains(&category));
        prop_assert_eq!(GeneralCategory::try_from(category), Ok(DB.general_category(code)));
    }

    #[test]
    fn bidi_class_matches_abbreviation(code in 0u32 .. 0x110000)
    {
        match DB.bidi_class(code) {
            Some(class) => prop_assert_eq!(class.abbr(), DB.bidirectional(code)),
            None => prop_assert_eq!(DB.bidirectional(code), ""),
        }
    }
}
