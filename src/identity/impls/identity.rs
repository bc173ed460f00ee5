use rand::rngs::OsRng;
use rand::{Rng, RngCore};
use crate::identity::structs::identity::Identity;

/// The BEP 20 client prefix Transmission 4.0.6 announces with.
pub const PEER_ID_PREFIX: &str = "-TR4060-";

const PEER_ID_CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

impl Identity {
    /// Generates a fresh identity from the operating system CSPRNG.
    ///
    /// The 12 random peer_id characters are drawn one at a time, uniform
    /// over the 36-symbol alphabet. The key is 4 random bytes rendered as
    /// 8 uppercase hex characters. A failing CSPRNG ends the process.
    pub fn generate() -> Identity {
        let mut rng = OsRng;

        let mut peer_id = String::with_capacity(20);
        peer_id.push_str(PEER_ID_PREFIX);
        for _ in 0..12 {
            let index = rng.gen_range(0..PEER_ID_CHARSET.len());
            peer_id.push(PEER_ID_CHARSET[index] as char);
        }

        let mut key_bytes = [0u8; 4];
        if let Err(e) = rng.try_fill_bytes(&mut key_bytes) {
            panic!("failed to read random bytes for key: {}", e);
        }
        let key = format!("{:08X}", u32::from_be_bytes(key_bytes));

        Identity { peer_id, key }
    }
}
