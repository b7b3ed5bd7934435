//! Provides the `LineSet` structure, initialized from the contents of the
//! input file.
use bstr::ByteSlice;
use fxhash::FxBuildHasher;
use indexmap::IndexSet;
use memchr::memchr;

/// A `LineSet` is an ordered set of trimmed, non-blank lines.
/// * Members are byte slices borrowed from the input buffer, so building the
///   set costs one allocation-free pass over the contents.
/// * Iteration order is first-occurrence order.
/// * Besides its members, a `LineSet` counts every non-blank line it was
///   offered, so the duplicate count is `total() - unique_count()`.
/// * A `LineSet` also keeps information about whether the input began with a
///   Unicode Byte Order Mark, and what line terminator was used on the first
///   line. The report writer emits a Byte Order Mark if the input had one,
///   and uses the same line terminator as the input's first line.
pub struct LineSet<'data> {
    set: UniqueLines<'data>,
    total: usize,
    bom: &'static [u8],             // Byte Order Mark or empty
    line_terminator: &'static [u8], // \n or \r\n
}
type UniqueLines<'data> = IndexSet<&'data [u8], FxBuildHasher>;

/// Creates a new `LineSet` holding the distinct trimmed, non-blank lines of
/// `slice`, each borrowed from `slice`, in order of first appearance.
#[must_use]
pub fn line_set_from(slice: &[u8]) -> LineSet<'_> {
    let (bom, line_terminator) = output_info(slice);
    let mut lines =
        LineSet { set: UniqueLines::default(), total: 0, bom, line_terminator };
    lines.insert_lines(&slice[bom.len()..]);
    lines
}

impl<'data> LineSet<'data> {
    /// Insert every line in `slice`
    fn insert_lines(&mut self, mut slice: &'data [u8]) {
        while let Some(end) = memchr(b'\n', slice) {
            let (line, rest) = slice.split_at(end);
            slice = &rest[1..];
            self.insert(line);
        }
        if !slice.is_empty() {
            self.insert(slice);
        }
    }

    // `trim` takes the `\r` of a CRLF line ending along with the rest of the
    // surrounding whitespace, so lines need no terminator fixup first.
    fn insert(&mut self, line: &'data [u8]) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }
        self.total += 1;
        self.set.insert(line);
    }

    /// True if no non-blank line was found in the input.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// How many non-blank lines the input held, duplicates included.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// How many distinct lines the input held.
    #[must_use]
    pub fn unique_count(&self) -> usize {
        self.set.len()
    }

    /// How many duplicate lines were dropped.
    #[must_use]
    pub fn removed(&self) -> usize {
        self.total - self.set.len()
    }

    /// The distinct lines, in order of first appearance.
    pub fn iter(&self) -> impl Iterator<Item = &'data [u8]> + '_ {
        self.set.iter().copied()
    }

    pub(crate) fn bom(&self) -> &'static [u8] {
        self.bom
    }

    pub(crate) fn line_terminator(&self) -> &'static [u8] {
        self.line_terminator
    }
}

/// Returns `(bom, line_terminator)`, where `bom` is the (UTF-8) Byte Order
/// Mark, or the empty string if `slice` has none, and `line_terminator` is
/// `\r\n` if the first line of `slice` ends with `\r\n`, and `\n` if the first
/// line ends just with `\n` (or is the only line in the file and has no line
/// terminator).
fn output_info(slice: &[u8]) -> (&'static [u8], &'static [u8]) {
    let mut bom: &'static [u8] = b"";
    let mut line_terminator: &'static [u8] = b"\n";
    if has_bom(slice) {
        bom = BOM_BYTES;
    }
    if let Some(n) = memchr(b'\n', slice) {
        if n > 0 && slice[n - 1] == b'\r' {
            line_terminator = b"\r\n";
        }
    }
    (bom, line_terminator)
}

const BOM_0: u8 = b'\xEF';
const BOM_1: u8 = b'\xBB';
const BOM_2: u8 = b'\xBF';
const BOM_BYTES: &[u8] = b"\xEF\xBB\xBF";
/// Does `contents` begin with a (UTF-8) Byte Order Mark?
fn has_bom(contents: &[u8]) -> bool {
    contents.len() >= 3
        && contents[0] == BOM_0
        && contents[1] == BOM_1
        && contents[2] == BOM_2
}
