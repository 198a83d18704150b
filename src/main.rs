/// Binary entrypoint for the `pokedex` executable.
///
/// Keeps the binary thin — all business logic lives in the `pokedex_lib`
/// crate so unit tests can import library functions directly.
fn main() {
    pokedex_lib::run();
}
