#![no_main]
use libfuzzer_sys::fuzz_target;
use pixelwire::DecodeRequest;

fuzz_target!(|data: &[u8]| {
    let n = data.len() as u32;

    // Arbitrary bytes through every codec — must never panic. Resolutions
    // are chosen so well-formed lengths actually decode.
    let _ = DecodeRequest::new(data).decode("P8", (n, 1), enough::Unstoppable);
    let _ = DecodeRequest::new(data).decode("P16", (n / 2, 1), enough::Unstoppable);
    let _ = DecodeRequest::new(data).decode("P10", (n / 20 * 16, 1), enough::Unstoppable);

    // The word-oriented P10 layout as well.
    let _ = pixelwire::p10::decode_word_layout(data, (n / 4 * 3, 1), enough::Unstoppable);
});
