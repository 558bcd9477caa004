#![no_main]

use gocolon::colonize::{ColonizeConfig, Colonizer, OnParseError};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        let colonizer = Colonizer::new(ColonizeConfig::new().with_on_parse_error(OnParseError::Ignore));
        if let Ok(once) = colonizer.colonize_str(s, None) {
            // Output must be the input plus `;`s, and stable under a second pass
            assert_eq!(once.output.len(), s.len() + once.inserted);
            if let Ok(twice) = colonizer.colonize_str(&once.output, None) {
                assert_eq!(twice.output, once.output);
            }
        }
    }
});
