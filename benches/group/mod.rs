pub const WARM_UP_TIME: u64 = 3;
pub const MEASUREMENT_TIME: u64 = 7;

/// группа замеров: одна и та же операция над кодпоинтами каждого образца текста
#[macro_export]
macro_rules! group {
    ($fn: ident, $test: ident, $group: expr, |$db: ident, $code: ident| $body: expr) => {
        #[inline(never)]
        fn $test($db: &UnicodeDatabase, codes: &[u32]) -> usize
        {
            let mut result = 0;

            for &$code in codes {
                let hit: bool = $body;

                if hit {
                    result += 1;
                }
            }

            result
        }

        fn $fn(c: &mut Criterion)
        {
            let mut group = c.benchmark_group($group);
            let db = UnicodeDatabase::new();

            group.warm_up_time(core::time::Duration::from_secs(group::WARM_UP_TIME));
            group.measurement_time(core::time::Duration::from_secs(group::MEASUREMENT_TIME));

            for (name, codes) in group::samples() {
                group.bench_with_input(
                    criterion::BenchmarkId::new($group, name),
                    &(&db, codes.as_slice()),
                    |b, data| b.iter(|| $test(data.0, criterion::black_box(data.1))),
                );
            }

            group.finish();
        }
    };
}

/// образцы текста на разных письменностях
const SAMPLES: [(&str, &str); 5] = [
    ("latin", "The quick brown fox jumps over the lazy dog. Ærøskøbing, Straße, façade, naïve."),
    ("cyrillic", "Съешь же ещё этих мягких французских булок, да выпей чаю. Ёлка, йод, щётка."),
    ("vietnamese", "Tiếng Việt là ngôn ngữ chính thức của Việt Nam, chữ Quốc ngữ có nhiều dấu."),
    ("hangul", "모든 인간은 태어날 때부터 자유로우며 그 존엄과 권리에 있어 동등하다."),
    ("cjk", "人人生而自由，在尊严和权利上一律平等。他们赋有理性和良心，并应以兄弟关系的精神相对待。"),
];

/// кодпоинты образцов, каждый образец повторен несколько раз
pub fn samples() -> Vec<(&'static str, Vec<u32>)>
{
    SAMPLES
        .iter()
        .map(|&(name, text)| {
            let codes = text.chars().map(u32::from).collect::<Vec<u32>>();

            (name, codes.repeat(16))
        })
        .collect()
}
