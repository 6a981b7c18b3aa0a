/// Frames per second used for the frame field of a timecode.
pub const FRAME_RATE: u32 = 24;

/// Formats elapsed whole seconds as `HH:MM:SS`. Hours wrap at 100.
pub fn format_clock(total_seconds: u64) -> String {
    let hours = (total_seconds / 3600) % 100;
    let minutes = (total_seconds / 60) % 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// SMPTE style `HH:MM:SS:FF` for a frame count at `FRAME_RATE`.
pub fn format_timecode(total_frames: u64) -> String {
    let fps = u64::from(FRAME_RATE);
    let frames = total_frames % fps;
    format!("{}:{:02}", format_clock(total_frames / fps), frames)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_pads_fields() {
        assert_eq!(format_clock(0), "00:00:00");
        assert_eq!(format_clock(1), "00:00:01");
        assert_eq!(format_clock(84), "00:01:24");
        assert_eq!(format_clock(3600 + 62), "01:01:02");
    }

    #[test]
    fn clock_hours_wrap() {
        assert_eq!(format_clock(100 * 3600 + 5), "00:00:05");
    }

    #[test]
    fn timecode_includes_frames() {
        // 1 minute 24 seconds and 12 frames
        assert_eq!(format_timecode(84 * 24 + 12), "00:01:24:12");
        assert_eq!(format_timecode(23), "00:00:00:23");
        assert_eq!(format_timecode(24), "00:00:01:00");
    }
}
