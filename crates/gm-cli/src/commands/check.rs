use colored::Colorize;

use gm_dice::DiceManager;

pub fn run(skill: i32, difficulty: i32, sides: u32, seed: Option<u64>) -> Result<(), String> {
    let mut dice = DiceManager::from_seed(seed);
    let result = dice
        .skill_check(skill, difficulty, sides)
        .map_err(|e| e.to_string())?;

    let narration = dice.show_roll(&result);
    if result.success {
        println!("{}", narration.green());
    } else {
        println!("{}", narration.red());
    }
    Ok(())
}
