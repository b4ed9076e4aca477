#![no_main]
use libfuzzer_sys::fuzz_target;
use pixelwire::{DecodeRequest, EncodeRequest, PixelImage};

fuzz_target!(|data: &[u8]| {
    let samples: Vec<u16> = data
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    let n = samples.len() as u32;

    // P8 roundtrips for byte-range samples
    let low: Vec<u16> = samples.iter().map(|&v| v & 0xFF).collect();
    let image = PixelImage::from_flat(low.clone());
    let encoded = EncodeRequest::new("P8")
        .unwrap()
        .encode(&image, enough::Unstoppable)
        .unwrap();
    let decoded = DecodeRequest::new(&encoded)
        .decode("P8", (n, 1), enough::Unstoppable)
        .unwrap();
    assert_eq!(decoded.samples(), &low[..], "P8 roundtrip sample mismatch");

    // P16 roundtrips for the full sample range
    let image = PixelImage::from_flat(samples.clone());
    let encoded = EncodeRequest::new("P16")
        .unwrap()
        .encode(&image, enough::Unstoppable)
        .unwrap();
    let decoded = DecodeRequest::new(&encoded)
        .decode("P16", (n, 1), enough::Unstoppable)
        .unwrap();
    assert_eq!(decoded.samples(), &samples[..], "P16 roundtrip sample mismatch");

    // The P10 word layout inverts through its own decoder (the chunk layout
    // does not pair with it)
    let packed: Vec<u16> = samples.iter().map(|&v| v & 0x3FF).collect();
    let encoded = pixelwire::p10::encode_word_layout(&packed, enough::Unstoppable).unwrap();
    let decoded =
        pixelwire::p10::decode_word_layout(&encoded, (n, 1), enough::Unstoppable).unwrap();
    assert_eq!(decoded, packed, "P10 word-layout roundtrip sample mismatch");
});
