//! SRT (SubRip) subtitle serialization

use std::path::Path;

use crate::subtitle::format_timestamp;
use crate::transcription::Segment;
use crate::Result;

/// Render segments as SRT text.
///
/// Entries are numbered from 1 in input order; the serializer does not
/// validate or reorder timestamps. Text is trimmed of surrounding
/// whitespace, embedded newlines are kept as-is. An empty segment list
/// renders as an empty string.
pub fn render_srt(segments: &[Segment]) -> Result<String> {
    let mut output = String::new();

    for (i, segment) in segments.iter().enumerate() {
        output.push_str(&format!("{}\n", i + 1));
        output.push_str(&format!(
            "{} --> {}\n",
            format_timestamp(segment.start)?,
            format_timestamp(segment.end)?
        ));
        output.push_str(&format!("{}\n\n", segment.text.trim()));
    }

    Ok(output)
}

/// Render segments and write them to `path` as UTF-8, replacing any
/// existing file.
pub fn write_srt(path: &Path, segments: &[Segment]) -> Result<()> {
    let content = render_srt(segments)?;
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_segment_list_renders_empty_output() {
        assert_eq!(render_srt(&[]).unwrap(), "");
    }

    #[test]
    fn renders_sequential_indices_in_input_order() {
        let segments = vec![
            Segment::new(0.0, 1.0, "Hi"),
            Segment::new(1.0, 2.0, "There"),
        ];
        let out = render_srt(&segments).unwrap();
        assert_eq!(
            out,
            "1\n00:00:00,000 --> 00:00:01,000\nHi\n\n\
             2\n00:00:01,000 --> 00:00:02,000\nThere\n\n"
        );
    }

    #[test]
    fn indices_restart_at_one_per_call() {
        let segments = vec![Segment::new(5.0, 6.0, "again")];
        let first = render_srt(&segments).unwrap();
        let second = render_srt(&segments).unwrap();
        assert!(first.starts_with("1\n"));
        assert_eq!(first, second);
    }

    #[test]
    fn trims_surrounding_whitespace_but_keeps_inner_newlines() {
        let segments = vec![Segment::new(0.0, 2.5, "  line one\nline two  ")];
        let out = render_srt(&segments).unwrap();
        assert!(out.contains("line one\nline two\n\n"));
        assert!(!out.contains("  line one"));
    }

    #[test]
    fn does_not_reorder_out_of_order_input() {
        let segments = vec![
            Segment::new(10.0, 11.0, "later"),
            Segment::new(0.0, 1.0, "earlier"),
        ];
        let out = render_srt(&segments).unwrap();
        let later_pos = out.find("later").unwrap();
        let earlier_pos = out.find("earlier").unwrap();
        assert!(later_pos < earlier_pos);
    }

    #[test]
    fn negative_timestamp_is_an_error() {
        let segments = vec![Segment::new(-1.0, 1.0, "bad")];
        assert!(render_srt(&segments).is_err());
    }

    #[test]
    fn writes_file_and_overwrites_on_second_call() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.srt");

        write_srt(&path, &[Segment::new(0.0, 1.0, "one")]).unwrap();
        write_srt(&path, &[Segment::new(0.0, 1.0, "two")]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("two"));
        assert!(!content.contains("one"));
    }
}
