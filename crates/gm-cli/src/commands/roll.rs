use gm_dice::DiceManager;

pub fn run(sides: u32, seed: Option<u64>) -> Result<(), String> {
    let mut dice = DiceManager::from_seed(seed);
    let roll = dice.roll_dice(sides).map_err(|e| e.to_string())?;
    println!("Rolled {roll} on a d{sides}");
    Ok(())
}
