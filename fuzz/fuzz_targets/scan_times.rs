#![no_main]

use libfuzzer_sys::fuzz_target;
use veritime::scan_times;

fuzz_target!(|data: &[u8]| {
    // Log content is never validated, so any text must scan without panicking
    let text = String::from_utf8_lossy(data);
    let _ = scan_times(&text);
});
