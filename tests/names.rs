use lazy_static::lazy_static;
use unicode_database::names::{ALIASES_START, NAMED_SEQUENCES_START};
use unicode_database::{LookupOptions, NotFound, UnicodeDatabase};

lazy_static! {
    static ref DB: UnicodeDatabase<'static> = UnicodeDatabase::new();
    /// все кодпоинты, у которых есть название
    static ref NAMED: Vec<u32> = (0 .. 0x110000).filter(|&code| DB.name(code).is_ok()).collect();
}

#[test]
fn names()
{
    assert_eq!(DB.name(0x41).unwrap(), "LATIN CAPITAL LETTER A");
    assert_eq!(DB.name(0xA0).unwrap(), "NO-BREAK SPACE");
    assert_eq!(DB.name(0x1F600).unwrap(), "GRINNING FACE");
    assert_eq!(DB.name(0xE01EF).unwrap(), "VARIATION SELECTOR-256");
    assert_eq!(DB.name(0x1B170).unwrap(), "NUSHU CHARACTER-1B170");

    assert_eq!(DB.name(0xAC00).unwrap(), "HANGUL SYLLABLE GA");
    assert_eq!(DB.name(0xD7A3).unwrap(), "HANGUL SYLLABLE HIH");
    assert_eq!(DB.name(0x4E00).unwrap(), "CJK UNIFIED IDEOGRAPH-4E00");
    assert_eq!(DB.name(0x20000).unwrap(), "CJK UNIFIED IDEOGRAPH-20000");
}

#[test]
fn unnamed()
{
    // управляющие символы, неназначенные кодпоинты, тангутские иероглифы
    assert_eq!(DB.name(0x0A), Err(NotFound::Codepoint(0x0A)));
    assert_eq!(DB.name(0x378), Err(NotFound::Codepoint(0x378)));
    assert_eq!(DB.name(0x17000), Err(NotFound::Codepoint(0x17000)));
    assert_eq!(DB.name(0x10FFFF), Err(NotFound::Codepoint(0x10FFFF)));

    // зарезервированные области псевдонимов и именованных последовательностей
    assert!(DB.name(ALIASES_START).is_err());
    assert!(DB.name(NAMED_SEQUENCES_START).is_err());
}

#[test]
fn lookups()
{
    assert_eq!(DB.lookup("LATIN CAPITAL LETTER A"), Ok(0x41));
    assert_eq!(DB.lookup("GRINNING FACE"), Ok(0x1F600));
    assert_eq!(DB.lookup("HANGUL SYLLABLE GA"), Ok(0xAC00));
    assert_eq!(DB.lookup("HANGUL SYLLABLE GAG"), Ok(0xAC01));
    assert_eq!(DB.lookup("CJK UNIFIED IDEOGRAPH-4E00"), Ok(0x4E00));
    assert_eq!(DB.lookup("CJK UNIFIED IDEOGRAPH-3134A"), Ok(0x3134A));

    assert_eq!(DB.lookup("LATIN CAPITAL LETTER"), Err(NotFound::Name("LATIN CAPITAL LETTER".to_owned())));
    assert!(DB.lookup("latin capital letter a").is_err());
    assert!(DB.lookup("").is_err());
    assert!(DB.lookup("HANGUL SYLLABLE").is_err());
    assert!(DB.lookup("HANGUL SYLLABLE GAX").is_err());
    assert!(DB.lookup("CJK UNIFIED IDEOGRAPH-4DC0").is_err());
    assert!(DB.lookup("CJK UNIFIED IDEOGRAPH-4e00").is_err());
}

#[test]
fn aliases()
{
    let options = LookupOptions::default().with_aliases();

    assert!(DB.lookup("LATIN CAPITAL LETTER GHA").is_err());
    assert_eq!(DB.lookup_with("LATIN CAPITAL LETTER GHA", options), Ok(0x1A2));
    assert_eq!(DB.lookup_with("BYTE ORDER MARK", options), Ok(0xFEFF));
    assert_eq!(DB.lookup_with("BOM", options), Ok(0xFEFF));
    assert_eq!(DB.lookup_with("ZWJ", options), Ok(0x200D));

    // у U+000A нет названия, только псевдоним
    assert_eq!(DB.lookup_with("LINE FEED", options), Ok(0x0A));
    assert!(DB.name(0x0A).is_err());

    // обычные названия с параметрами ищутся так же
    assert_eq!(DB.lookup_with("LATIN CAPITAL LETTER A", options), Ok(0x41));
}

#[test]
fn named_sequences()
{
    let options = LookupOptions::new().with_named_sequences();

    assert!(DB.lookup("KEYCAP NUMBER SIGN").is_err());
    assert!(DB.lookup_with("KEYCAP NUMBER SIGN", LookupOptions::new().with_aliases()).is_err());

    let code = DB.lookup_with("KEYCAP NUMBER SIGN", options).unwrap();

    assert!(code >= NAMED_SEQUENCES_START);
    assert_eq!(DB.lookup_named_sequence(code).as_deref(), Some("\u{23}\u{FE0F}\u{20E3}"));

    let code = DB.lookup_with("LATIN SMALL LETTER R WITH TILDE", options).unwrap();
    assert_eq!(DB.lookup_named_sequence(code).as_deref(), Some("r\u{303}"));

    assert_eq!(DB.lookup_named_sequence(0x41), None);
    assert_eq!(DB.lookup_named_sequence(ALIASES_START), None);
}

#[test]
fn round_trip()
{
    assert_eq!(NAMED.len(), 138_552);

    for &code in NAMED.iter() {
        let name = DB.name(code).unwrap();

        assert_eq!(DB.lookup(&name), Ok(code), "{}", name);
    }
}

#[test]
fn names_are_unique()
{
    let mut names: Vec<String> = NAMED.iter().map(|&code| DB.name(code).unwrap()).collect();
    let count = names.len();

    names.sort();
    names.dedup();

    assert_eq!(names.len(), count);
    assert!(names.iter().all(|name| name.len() <= 88));
}
