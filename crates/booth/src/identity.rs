use model::Address;
use uuid::Uuid;

/// Source of mock wallet addresses for [`Session::connect`](crate::Session::connect).
pub trait Identity {
    fn generate(&mut self) -> Address;
}

/// Generates a fresh `0x`-prefixed address from 128 random bits.
#[derive(Debug, Default, Clone, Copy)]
pub struct Random;

impl Identity for Random {
    fn generate(&mut self) -> Address {
        let bytes = Uuid::new_v4().into_bytes();
        let text = String::from("0x") + &hex::encode(bytes);
        Address::from(text)
    }
}

/// Always hands out the same address.
#[derive(Debug, Clone)]
pub struct Fixed(pub Address);

impl Identity for Fixed {
    fn generate(&mut self) -> Address {
        self.0.clone()
    }
}
