//! Border decorations, selected by frame style index

type FrameRenderer = fn(&str) -> String;

const FRAMES: [FrameRenderer; 4] = [classic, double, dashed, corners];

/// Frame fragment for `index`, empty when the index has no template
pub fn frame_fragment(index: usize, color: &str) -> String {
    FRAMES
        .get(index)
        .map(|render| render(color))
        .unwrap_or_default()
}

fn classic(color: &str) -> String {
    format!(
        r#"<rect x="5" y="5" width="390" height="390" fill="none" stroke="{color}" stroke-width="2" opacity="0.6"/>"#
    )
}

fn double(color: &str) -> String {
    format!(
        r#"
        <rect x="5" y="5" width="390" height="390" fill="none" stroke="{color}" stroke-width="1" opacity="0.4"/>
        <rect x="15" y="15" width="370" height="370" fill="none" stroke="{color}" stroke-width="1" opacity="0.6"/>
      "#
    )
}

fn dashed(color: &str) -> String {
    format!(
        r#"<rect x="5" y="5" width="390" height="390" fill="none" stroke="{color}" stroke-width="2" stroke-dasharray="10,5" opacity="0.6"/>"#
    )
}

fn corners(color: &str) -> String {
    format!(
        r#"
        <g stroke="{color}" stroke-width="3" fill="none" opacity="0.8">
          <path d="M5,25 L5,5 L25,5"/>
          <path d="M375,5 L395,5 L395,25"/>
          <path d="M395,375 L395,395 L375,395"/>
          <path d="M25,395 L5,395 L5,375"/>
        </g>
      "#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_frames() {
        assert!(frame_fragment(0, "#fff").starts_with("<rect"));
        assert_eq!(frame_fragment(1, "#fff").matches("<rect").count(), 2);
        assert!(frame_fragment(2, "#fff").contains("stroke-dasharray=\"10,5\""));
        assert_eq!(frame_fragment(3, "#fff").matches("<path").count(), 4);
    }

    #[test]
    fn test_unknown_frame_is_empty() {
        assert_eq!(frame_fragment(4, "#fff"), "");
        assert_eq!(frame_fragment(usize::MAX, "#fff"), "");
    }
}
