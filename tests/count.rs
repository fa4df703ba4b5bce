use day12::{count, unfold, CountCache, Pattern, Record, RunSpec, DEFAULT_UNFOLD_FACTOR};
use num::BigUint;

fn record(text: &str) -> Record {
    Record::try_from(text).unwrap()
}

fn pattern(text: &str) -> Pattern {
    Pattern::try_from(text).unwrap()
}

fn runs(lens: &[usize]) -> RunSpec {
    RunSpec::new(lens.to_vec()).unwrap()
}

fn big(n: u128) -> BigUint {
    BigUint::from(n)
}

const SAMPLE_RECORDS: [&str; 6] = [
    "???.### 1,1,3",
    ".??..??...?##. 1,1,3",
    "?#?#?#?#?#?#?#? 1,3,1,6",
    "????.#...#... 4,1,1",
    "????.######..#####. 1,6,5",
    "?###???????? 3,2,1",
];

fn sample_records() -> Vec<Record> {
    SAMPLE_RECORDS.iter().map(|s| record(s)).collect()
}

#[test]
fn count_sample_records() {
    let counts = sample_records()
        .iter()
        .map(|r| r.count())
        .collect::<Vec<_>>();

    assert_eq!(counts, [1, 4, 1, 1, 4, 10].map(big).to_vec());
}

#[test]
fn count_unfolded_sample_records() {
    let counts = sample_records()
        .iter()
        .map(|r| r.unfold(DEFAULT_UNFOLD_FACTOR).count())
        .collect::<Vec<_>>();

    assert_eq!(counts, [1, 16384, 1, 16, 2500, 506250].map(big).to_vec());
}

#[test]
fn sum_sample_records() {
    let records = sample_records();

    assert_eq!(day12::sum_counts(&records), big(21));
    assert_eq!(
        day12::sum_unfolded_counts(&records, DEFAULT_UNFOLD_FACTOR),
        big(525152)
    );
}

#[test]
fn sum_of_no_records_is_zero() {
    assert_eq!(day12::sum_counts(&[]), big(0));
    assert_eq!(day12::sum_unfolded_counts(&[], DEFAULT_UNFOLD_FACTOR), big(0));
}

#[test]
fn count_without_unknown_is_zero_or_one() {
    assert_eq!(count(&pattern("#.#.###"), &runs(&[1, 1, 3])), big(1));
    assert_eq!(count(&pattern(".#...#....###."), &runs(&[1, 1, 3])), big(1));
    assert_eq!(count(&pattern("#.#.###"), &runs(&[1, 1, 2])), big(0));
    assert_eq!(count(&pattern("##..###"), &runs(&[1, 1, 3])), big(0));
    assert_eq!(count(&pattern("#.#.###"), &runs(&[1, 1, 3, 1])), big(0));
    assert_eq!(count(&pattern("...."), &runs(&[])), big(1));
}

#[test]
fn count_with_empty_runs() {
    assert_eq!(count(&pattern("?.??..?"), &runs(&[])), big(1));
    assert_eq!(count(&pattern("?.?#..?"), &runs(&[])), big(0));
    assert_eq!(count(&pattern(""), &runs(&[])), big(1));
}

#[test]
fn count_with_empty_pattern() {
    assert_eq!(count(&pattern(""), &runs(&[1])), big(0));
}

#[test]
fn count_when_runs_cannot_fit() {
    assert_eq!(count(&pattern("???"), &runs(&[1, 2])), big(0));
    assert_eq!(count(&pattern("????"), &runs(&[1, 2])), big(1));
    assert_eq!(count(&pattern("??"), &runs(&[3])), big(0));
}

#[test]
fn count_run_at_the_end_of_pattern() {
    assert_eq!(count(&pattern("..??"), &runs(&[2])), big(1));
    assert_eq!(count(&pattern("???"), &runs(&[1])), big(3));
    assert_eq!(count(&pattern("???#"), &runs(&[1])), big(1));
}

#[test]
fn count_of_all_unknown_is_binomial() {
    // 3 runs of length 1 in 10 unknowns: choose 3 starts from 8 positions.
    assert_eq!(count(&pattern("??????????"), &runs(&[1, 1, 1])), big(56));
}

#[test]
fn count_beyond_u64() {
    let (p, r) = unfold(&pattern(&"?".repeat(40)), &runs(&[1, 1, 1, 1]), 5);
    let n = count(&p, &r);

    // 20 runs of length 1 in 204 unknowns: choose 20 starts from 185 positions.
    assert!(n > big(u128::from(u64::MAX)));
    assert_eq!(n, big(312409969165490058097086670));
}

#[test]
fn sum_beyond_u128_with_large_factor() {
    let records = vec![record("???????????????????? 1,1,1,1,1")];
    let expected = "9928043635707286686004393123861452497121946938582311134392752268811653825453644301120"
        .parse::<BigUint>()
        .unwrap();

    // 100 runs of length 1 in 419 unknowns: choose 100 starts from 320 positions.
    assert!(expected > big(u128::MAX));
    assert_eq!(day12::sum_unfolded_counts(&records, 20), expected);
}

#[test]
fn count_run_longer_than_any_pattern() {
    assert_eq!(record("?? 18446744073709551615").count(), big(0));
    assert_eq!(record("#.?? 1,18446744073709551615").count(), big(0));
    assert_eq!(record("??.## 18446744073709551615,2").count(), big(0));
}

#[test]
fn unfold_repeats_pattern_and_runs() {
    let (p, r) = unfold(&pattern(".#"), &runs(&[1]), 5);

    assert_eq!(p.to_string(), ".#?.#?.#?.#?.#");
    assert_eq!(r.lens(), &[1, 1, 1, 1, 1]);
}

#[test]
fn unfold_lengths() {
    for text in SAMPLE_RECORDS {
        let r = record(text);
        let unfolded = r.unfold(5);

        assert_eq!(unfolded.pattern().len(), 5 * r.pattern().len() + 4);
        assert_eq!(unfolded.runs().lens(), r.runs().lens().repeat(5).as_slice());
    }
}

#[test]
fn unfold_with_small_factors() {
    let r = record("???.### 1,1,3");

    assert_eq!(r.unfold(1), r);
    let empty = r.unfold(0);
    assert!(empty.pattern().is_empty());
    assert!(empty.runs().is_empty());
    assert_eq!(empty.count(), big(1));
}

#[test]
fn unfold_is_deterministic() {
    let r = record("?###???????? 3,2,1");

    assert_eq!(r.unfold(5), r.unfold(5));
}

#[test]
fn cache_agrees_with_direct_count() {
    let cache = CountCache::new();
    assert!(cache.is_empty());

    for r in sample_records() {
        assert_eq!(cache.count(&r), r.count());
        assert_eq!(cache.count(&r), r.count());
    }
    assert_eq!(cache.len(), SAMPLE_RECORDS.len());
}

#[test]
fn duplicate_records_are_counted_each_time() {
    let r = record("?###???????? 3,2,1");
    let records = vec![r.clone(), r.clone(), r];

    assert_eq!(day12::sum_counts(&records), big(30));
}
