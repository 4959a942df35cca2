#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must never panic the decoder, with or without limits.
    let _ = bmpcodec::Bitmap::decode(data);

    let limits = bmpcodec::Limits {
        max_pixels: Some(1 << 20),
        max_memory_bytes: Some(16 << 20),
        ..Default::default()
    };
    let _ = bmpcodec::Bitmap::decode_with_limits(data, &limits);
});
