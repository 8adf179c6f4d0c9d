//! Print ANSI/VT100 terminal control sequences by name.
fn main() -> vtseq::Result<()> { vtseq::main() }
