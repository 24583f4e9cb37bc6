use lazy_static::lazy_static;
use proptest::prelude::*;
use unicode_database::UnicodeDatabase;

lazy_static! {
    static ref DB: UnicodeDatabase<'static> = UnicodeDatabase::new();
}

#[test]
fn simple_mappings()
{
    assert_eq!(DB.to_lower(0x41), 0x61);
    assert_eq!(DB.to_upper(0x61), 0x41);
    assert_eq!(DB.to_title(0x61), 0x41);
    assert_eq!(DB.to_upper(0x31), 0x31);

    assert_eq!(DB.to_upper(0xB5), 0x39C);
    assert_eq!(DB.to_upper(0xFF), 0x178);
    assert_eq!(DB.to_lower(0x3A9), 0x3C9);
    assert_eq!(DB.to_lower(0x130), 0x69);

    // диграфы: у заглавной формы своя буква
    assert_eq!(DB.to_title(0x1C6), 0x1C5);
    assert_eq!(DB.to_upper(0x1C5), 0x1C4);
    assert_eq!(DB.to_lower(0x1C5), 0x1C6);

    // без преобразования
    assert_eq!(DB.to_upper(0x4E00), 0x4E00);
    assert_eq!(DB.to_lower(0x10FFFF), 0x10FFFF);
}

#[test]
fn full_mappings()
{
    assert_eq!(DB.to_upper_full(0xDF), vec![0x53, 0x53]);
    assert_eq!(DB.to_title_full(0xDF), vec![0x53, 0x73]);
    assert_eq!(DB.to_lower_full(0xDF), vec![0xDF]);

    assert_eq!(DB.to_upper_full(0xFB01), vec![0x46, 0x49]);
    assert_eq!(DB.to_title_full(0xFB00), vec![0x46, 0x66]);
    assert_eq!(DB.to_lower_full(0x130), vec![0x69, 0x307]);
    assert_eq!(DB.to_upper_full(0x149), vec![0x2BC, 0x4E]);
    assert_eq!(DB.to_upper_full(0x1F0), vec![0x4A, 0x30C]);

    // специального преобразования нет - простое
    assert_eq!(DB.to_upper_full(0x61), vec![0x41]);
    assert_eq!(DB.to_upper_full(0xFF), vec![0x178]);
    assert_eq!(DB.to_title_full(0x1C6), vec![0x1C5]);
}

#[test]
fn case_folding()
{
    assert_eq!(DB.case_fold(0xDF), vec![0x73, 0x73]);
    assert_eq!(DB.case_fold(0x1E9E), vec![0x73, 0x73]);
    assert_eq!(DB.case_fold(0xFB01), vec![0x66, 0x69]);
    assert_eq!(DB.case_fold(0xB5), vec![0x3BC]);
    assert_eq!(DB.case_fold(0x3A3), vec![0x3C3]);
    assert_eq!(DB.case_fold(0x3C2), vec![0x3C3]);

    // свертка не задана - полное преобразование в строчные
    assert_eq!(DB.case_fold(0x130), vec![0x69, 0x307]);
    assert_eq!(DB.case_fold(0x41), vec![0x61]);
    assert_eq!(DB.case_fold(0x4E00), vec![0x4E00]);
}

/// свертка каждого кодпоинта последовательности
fn fold_all(codes: &[u32]) -> Vec<u32>
{
    codes.iter().flat_map(|&code| DB.case_fold(code)).collect()
}

proptest! {
    #[test]
    fn simple_mappings_are_idempotent(code in 0u32 .. 0x110000)
    {
        let upper = DB.to_upper(code);
        let lower = DB.to_lower(code);

        prop_assert_eq!(DB.to_upper(upper), upper);
        prop_assert_eq!(DB.to_lower(lower), lower);
    }

    #[test]
    fn case_fold_is_idempotent(code in 0u32 .. 0x110000)
    {
        let folded = DB.case_fold(code);

        prop_assert_eq!(fold_all(&folded), folded);
    }

    #[test]
    fn full_mappings_are_never_empty(code in 0u32 .. 0x110000)
    {
        prop_assert!(!DB.to_upper_full(code).is_empty());
        prop_assert!(!DB.to_lower_full(code).is_empty());
        prop_assert!(!DB.to_title_full(code).is_empty());
        prop_assert!(!DB.case_fold(code).is_empty());
    }
}
