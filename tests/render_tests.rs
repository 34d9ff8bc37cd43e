// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for the render policies

use depth_viewer::{DepthBuffer, FrameFormat, RenderMode, render};

fn buffer(data: Vec<u8>, width: u32, height: u32, bpp: u32) -> DepthBuffer {
    DepthBuffer::from_bytes(data, width, height, bpp).unwrap()
}

#[test]
fn test_concrete_16bpp_scenario() {
    // 2x1 @ 16 bpp, bytes [00 00 FF FF]: both greyscale policies emit [0, 255].
    let bytes = vec![0x00, 0x00, 0xFF, 0xFF];

    let frame = render(&buffer(bytes.clone(), 2, 1, 16), RenderMode::Greyscale).unwrap();
    assert_eq!(frame.format, FrameFormat::Gray8);
    assert_eq!(frame.data, [0, 255]);

    let frame = render(&buffer(bytes, 2, 1, 16), RenderMode::Stretched).unwrap();
    assert_eq!(frame.data, [0, 255]);
}

#[test]
fn test_concrete_32bpp_scenario() {
    // 1x1 @ 32 bpp, bytes [AA 10 20 30]: stencil 0xAA discarded,
    // v = 0x10 + 0x20*256 + 0x30*65536 = 3147792.
    let b = buffer(vec![0xAA, 0x10, 0x20, 0x30], 1, 1, 32);
    assert_eq!(b.sample_at(0, 0), Some(0x3020_10AA));

    let frame = render(&b, RenderMode::Rgb).unwrap();
    assert_eq!(frame.format, FrameFormat::Rgb8);
    assert_eq!(frame.data, [0x10, 0x20, 0x30]);

    let frame = render(&b, RenderMode::Greyscale).unwrap();
    assert_eq!(frame.data, [(3147792u64 * 255 / 16777215) as u8]);
}

#[test]
fn test_all_zero_dump_stretches_to_black() {
    // Flat-frame rule, for both element sizes.
    let frame = render(&buffer(vec![0; 4 * 4 * 2], 4, 4, 16), RenderMode::Stretched).unwrap();
    assert!(frame.data.iter().all(|&p| p == 0));
    assert_eq!(frame.data.len(), 16);

    let frame = render(&buffer(vec![0; 4 * 4 * 4], 4, 4, 32), RenderMode::Stretched).unwrap();
    assert!(frame.data.iter().all(|&p| p == 0));
    assert_eq!(frame.data.len(), 16);
}

#[test]
fn test_frame_is_presized_to_declared_shape() {
    let frame = render(&buffer(vec![0; 6 * 4 * 2], 6, 4, 16), RenderMode::Rgb).unwrap();
    assert_eq!(frame.data.len(), 6 * 4 * frame.format.channels());
    assert_eq!((frame.width, frame.height), (6, 4));
}

#[test]
fn test_stretch_remaps_observed_range() {
    // Samples 1000..=1004: output spans exactly 0..=255.
    let mut bytes = Vec::new();
    for v in 1000u16..=1004 {
        bytes.extend_from_slice(&v.to_le_bytes());
    }
    let frame = render(&buffer(bytes, 5, 1, 16), RenderMode::Stretched).unwrap();
    assert_eq!(frame.data[0], 0);
    assert_eq!(*frame.data.last().unwrap(), 255);
    for pair in frame.data.windows(2) {
        assert!(pair[0] <= pair[1]);
    }
}

#[test]
fn test_rendered_frame_encodes_via_image_crate() {
    let dir = std::env::temp_dir();
    let path = dir.join("depth_viewer_render_test.png");

    let frame = render(&buffer(vec![0x12, 0x34], 1, 1, 16), RenderMode::Rgb).unwrap();
    frame.into_image().save(&path).unwrap();

    let decoded = image::open(&path).unwrap().into_rgb8();
    assert_eq!(decoded.get_pixel(0, 0).0, [0x12, 0x34, 0x00]);

    std::fs::remove_file(&path).ok();
}
