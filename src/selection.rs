/// Extracts the 1-based field numbers from free-form user input.
///
/// The input is split on whitespace and then on commas. Every piece that
/// parses as an integer in `1..=max_field` is kept, in the order it appears
/// and including repeats. Anything else is skipped, so an empty result means
/// nothing usable was typed.
pub fn parse_field_selection(input: &str, max_field: usize) -> Vec<usize> {
    input
        .split_whitespace()
        .flat_map(|token| token.split(','))
        .filter_map(|piece| piece.parse::<i64>().ok())
        .filter(|&n| n > 0)
        .filter_map(|n| usize::try_from(n).ok())
        .filter(|&n| n <= max_field)
        .collect()
}
