#![no_main]
use libfuzzer_sys::fuzz_target;

use fontgen::ConfigFile;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(config) = ConfigFile::from_json(text) {
        let merged = ConfigFile::defaults().merge(config);
        let _ = merged.clone().resolve();
        let _ = merged.to_json();
    }
});
