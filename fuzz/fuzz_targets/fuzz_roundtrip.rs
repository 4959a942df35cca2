#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Anything that decodes must re-encode and decode to identical pixels.
    let Ok(decoded) = bmpcodec::Bitmap::decode(data) else {
        return;
    };

    let reencoded = decoded.encode().expect("decoded bitmap failed to encode");
    let decoded2 =
        bmpcodec::Bitmap::decode(&reencoded).expect("re-encoded data failed to decode");

    assert_eq!(decoded.pixels(), decoded2.pixels(), "roundtrip pixel mismatch");
    assert_eq!(decoded.width(), decoded2.width());
    assert_eq!(decoded.height(), decoded2.height());
    assert_eq!(decoded.bits_per_pixel(), decoded2.bits_per_pixel());
});
