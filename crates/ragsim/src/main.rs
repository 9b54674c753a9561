use anyhow::Result;

fn main() -> Result<()> {
    ragsim_lib::main()
}
