fn main() {
    quadra_frontend::start();
}
