use el320_span::{draw_screen, init_screen, SpanError};

/// Sets one pixel at a time, no whole-byte stores.
fn reference_fill(width: usize, depth: usize, x1: usize, x2: usize, row: usize) -> Vec<u8> {
    let mut screen = vec![0u8; width * depth];
    for bit in x1..=x2 {
        screen[row * width + bit / 8] |= 0x80 >> (bit % 8);
    }
    screen
}

fn draw(width: usize, depth: usize, x1: usize, x2: usize, row: usize) -> Vec<u8> {
    // garbage first so a missing clear shows up
    let mut screen = vec![0xA5u8; width * depth];
    let _ = draw_screen(Some(&mut screen[..]), width, depth, x1, x2, row);
    screen
}

#[test]
fn test_blank_screen() {
    let mut screen = [0xFFu8; 9];
    init_screen(&mut screen, 3, 3);
    assert_eq!(screen, [0; 9]);
}

#[test]
fn test_first_pixel() {
    assert_eq!(draw(2, 2, 0, 0, 0), [0x80, 0, 0, 0]);
}

#[test]
fn test_first_two_pixels() {
    assert_eq!(draw(2, 2, 0, 1, 0), [0xC0, 0, 0, 0]);
}

#[test]
fn test_first_byte() {
    assert_eq!(draw(2, 2, 0, 7, 0), [0xFF, 0, 0, 0]);
}

#[test]
fn test_first_two_bytes() {
    assert_eq!(draw(2, 2, 0, 15, 0), [0xFF, 0xFF, 0, 0]);
}

#[test]
fn test_offset_spanning_two_bytes() {
    assert_eq!(draw(3, 1, 3, 21, 0), [0x1F, 0xFF, 0xFC]);
}

#[test]
fn test_full_row() {
    assert_eq!(draw(2, 2, 0, 15, 1), [0, 0, 0xFF, 0xFF]);
}

#[test]
fn test_x2_exceeds_width() {
    let mut screen = [0xA5u8; 4];
    let result = draw_screen(Some(&mut screen[..]), 2, 2, 0, 16, 1);
    assert_eq!(result, Err(SpanError::EndOutOfBounds { x2: 16, bit_width: 16 }));
    assert_eq!(screen, [0; 4]);
}

#[test]
fn test_x1_exceeds_x2() {
    let mut screen = [0xA5u8; 4];
    let result = draw_screen(Some(&mut screen[..]), 4, 1, 15, 14, 0);
    assert_eq!(result, Err(SpanError::InvertedRange { x1: 15, x2: 14 }));
    assert_eq!(screen, [0; 4]);
}

#[test]
fn test_absent_buffer() {
    assert_eq!(draw_screen(None, 2, 2, 0, 3, 0), Err(SpanError::NoBuffer));
}

#[test]
fn test_matches_reference_fill() {
    for (width, depth) in [(1, 1), (2, 3), (3, 2), (5, 2)] {
        for row in 0..depth {
            for x1 in 0..width * 8 {
                for x2 in x1..width * 8 {
                    assert_eq!(
                        draw(width, depth, x1, x2, row),
                        reference_fill(width, depth, x1, x2, row),
                        "width {} depth {} span {}..={} row {}",
                        width,
                        depth,
                        x1,
                        x2,
                        row
                    );
                }
            }
        }
    }
}

#[test]
fn test_fill_counts_cover_span() {
    let (width, depth) = (4, 1);
    for x1 in 0..width * 8 {
        for x2 in x1..width * 8 {
            let mut screen = vec![0u8; width * depth];
            let fill = draw_screen(Some(&mut screen[..]), width, depth, x1, x2, 0).unwrap();
            assert_eq!(fill.full_bytes * 8 + fill.single_bits, x2 - x1 + 1);
            let ones: u32 = screen.iter().map(|b| b.count_ones()).sum();
            assert_eq!(ones as usize, x2 - x1 + 1);
        }
    }
}

#[test]
fn test_idempotent() {
    let mut once = vec![0u8; 12];
    draw_screen(Some(&mut once[..]), 4, 3, 5, 27, 2).unwrap();

    let mut twice = vec![0u8; 12];
    draw_screen(Some(&mut twice[..]), 4, 3, 5, 27, 2).unwrap();
    draw_screen(Some(&mut twice[..]), 4, 3, 5, 27, 2).unwrap();

    assert_eq!(once, twice);
}

#[test]
fn test_redraw_replaces_previous_span() {
    let mut screen = vec![0u8; 4];
    draw_screen(Some(&mut screen[..]), 2, 2, 0, 15, 0).unwrap();
    draw_screen(Some(&mut screen[..]), 2, 2, 8, 8, 1).unwrap();
    assert_eq!(screen, [0, 0, 0, 0x80]);
}
