use honggfuzz::fuzz;
use looptasks::get_nearest_bigger;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            if data.len() < 8 {
                return;
            }
            let n = u64::from_le_bytes(data[..8].try_into().unwrap());
            if let Ok(next) = get_nearest_bigger(n) {
                assert!(next >= n);
            }
        });
    }
}
