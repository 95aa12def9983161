use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

// Section, alignment, type and visibility declarations are build noise,
// not instruction content
pub const DIRECTIVE_MARKERS: &[&str] = &[".section", ".p2align", ".type", ".globl"];

pub fn is_directive_line(line: &str) -> bool {
    DIRECTIVE_MARKERS.iter().any(|marker| line.contains(marker))
}

pub fn strip_directives(text: &str) -> String {
    let mut kept = String::with_capacity(text.len());

    for line in text.lines() {
        if !is_directive_line(line) {
            kept.push_str(line);
            kept.push('\n');
        }
    }

    kept
}

pub fn rewrite_filtered<P>(path: P) -> io::Result<()>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let raw = fs::read_to_string(path)?;

    let directory = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut temporary = NamedTempFile::new_in(directory)?;
    temporary.write_all(strip_directives(&raw).as_bytes())?;
    temporary.persist(path).map_err(|error| error.error)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_lines_are_removed() {
        let raw = "vec3_sum_manual:\n\t.p2align\t4, 0x90\n\tmovaps xmm1, xmm0\n\t.type vec3_sum_manual,@function\n\tret\n";

        assert_eq!(
            strip_directives(raw),
            "vec3_sum_manual:\n\tmovaps xmm1, xmm0\n\tret\n"
        );
    }

    #[test]
    fn marker_anywhere_in_the_line_counts() {
        assert!(is_directive_line(
            "\t.section .text.vec3_sum_manual,\"ax\",@progbits"
        ));
        assert!(is_directive_line(".globl vec3_sum_manual"));
        assert!(!is_directive_line("\tret"));
    }

    #[test]
    fn blank_lines_survive() {
        let raw = "ret\n\n\nret\n";

        assert_eq!(strip_directives(raw), raw);
    }

    #[test]
    fn filtering_is_idempotent() {
        let raw = "a:\n\t.globl a\n\tret\n";

        let once = strip_directives(raw);

        assert_eq!(strip_directives(&once), once);
    }

    #[test]
    fn rewrite_replaces_the_file_in_place() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("fns.asm");

        fs::write(&path, "a:\n\t.section .text\n\tret\n").unwrap();
        rewrite_filtered(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "a:\n\tret\n");
    }
}
