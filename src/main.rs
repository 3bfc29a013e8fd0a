#[cfg(target_arch = "wasm32")]
pub fn main() {
    membergate::start();
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
