use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    collisim::simulation_builder::main()
}
