use std::time::Instant;

use serde_json::json;
use vid_overlay::{FrameFormat, OverlayFilter, VideoFrame};

fn main() {
    let filter = OverlayFilter::new();

    let width = 640u32;
    let height = 480u32;
    let frame_size = (width * height * 3) as usize;
    let mut frame_data = vec![0u8; frame_size];

    // Fill with gradient pattern for more interesting input
    for y in 0..height {
        for x in 0..width {
            let idx = ((y * width + x) * 3) as usize;
            frame_data[idx] = (x % 256) as u8;
            frame_data[idx + 1] = (y % 256) as u8;
            frame_data[idx + 2] = 128;
        }
    }
    let baseline = frame_data.clone();

    let meta = json!({
        "face-0": { "x": 120, "y": 80, "width": 160, "height": 200 },
        "face-1": { "x": 400, "y": 150, "width": 120, "height": 140 },
        "timestamp": 1234567,
    });

    println!("Annotating {}x{} frame with 2 regions", width, height);

    let iterations = 100;
    let start = Instant::now();
    for _ in 0..iterations {
        let mut frame = VideoFrame {
            data: &mut frame_data,
            width,
            height,
            format: FrameFormat::Bgr8,
            meta: Some(&meta),
        };
        if let Err(e) = filter.process_frame(&mut frame) {
            eprintln!("Frame processing failed: {}", e);
            std::process::exit(1);
        }
    }
    let elapsed = start.elapsed();

    let changed = frame_data
        .iter()
        .zip(baseline.iter())
        .filter(|(a, b)| a != b)
        .count();

    println!("Processed {} frames in {:?}", iterations, elapsed);
    println!(
        "Average: {:.1} us/frame",
        elapsed.as_micros() as f64 / iterations as f64
    );
    println!("Bytes changed by the overlay: {}", changed);
    println!(
        "Surface dimensions: {:?}",
        filter.surface_dimensions().unwrap_or((0, 0))
    );
}
