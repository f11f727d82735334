use honggfuzz::fuzz;
use looptasks::{cycle_length, shuffle_char};

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            if data.len() < 2 {
                return;
            }
            let k = u64::from(data[0]);
            let text = String::from_utf8_lossy(&data[1..]);
            let period = cycle_length(&text) as u64;
            assert_eq!(shuffle_char(&text, period + k), shuffle_char(&text, k));
        });
    }
}
