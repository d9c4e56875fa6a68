fn main() {
  runecraft::main();
}
