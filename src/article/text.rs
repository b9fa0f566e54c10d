/// Preview article shown behind the settings panel
pub const ARTICLE_TITLE: &str = "Human scale";

pub const ARTICLE_PARAGRAPHS: &[&str] = &[
    "Cities were once measured in footsteps. A market was as far as a basket could be carried, \
     a parish as wide as a bell could be heard, and a street as long as a neighbour could be \
     recognised from its far end.",
    "Typography has its own human scale. A line that runs too long tires the eye on its way back \
     to the left margin; a line that is too short breaks every thought into fragments. Between \
     the two sits a comfortable measure of roughly sixty to seventy characters.",
    "Colour and contrast matter as much as size. Dark text on a light ground reads well in \
     daylight, light text on a dark ground is easier on the eyes at night, and every reader has \
     a different idea of which is which.",
    "None of these choices is universal, which is why good reading tools let people decide for \
     themselves.",
];
