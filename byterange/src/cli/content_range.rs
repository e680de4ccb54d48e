use byterange_core::ByteRange;

/// Prints the `Content-Range` value, or an empty line for open-ended ranges.
pub fn run(range: &str, length: u64) {
    println!("{}", render(range, length));
}

pub(crate) fn render(range: &str, length: u64) -> String {
    ByteRange::parse(range).to_header_value(length)
}
