#![no_main]
use libfuzzer_sys::fuzz_target;

use larder::recipe::parse_ingredients;
use larder::render::highlight_ingredients;

fuzz_target!(|data: (&str, &str)| {
    let (step, ingredients) = data;
    let ingredients = parse_ingredients(ingredients, ',');
    let _ = highlight_ingredients(step, &ingredients);
});
