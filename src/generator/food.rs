//! Food vocabulary: cuisine categories, dishes, descriptions and ingredients.

use rand::seq::SliceRandom;
use rand::Rng;

pub const ETHNIC_CATEGORIES: &[&str] = &[
    "American", "Argentinian", "Brazilian", "British", "Cajun", "Caribbean", "Chinese",
    "Cuban", "Ethiopian", "Filipino", "French", "German", "Greek", "Indian", "Indonesian",
    "Irish", "Italian", "Jamaican", "Japanese", "Korean", "Lebanese", "Malaysian",
    "Mediterranean", "Mexican", "Middle Eastern", "Moroccan", "Nepalese", "Peruvian",
    "Polish", "Portuguese", "Russian", "Spanish", "Swedish", "Thai", "Turkish",
    "Vietnamese",
];

pub const DISHES: &[&str] = &[
    "Arepas", "Barbecue Ribs", "Bruschette with Tomato", "Bunny Chow", "Caesar Salad",
    "California Maki", "Caprese Salad", "Cauliflower Penne", "Cheeseburger", "Chicken Fajitas",
    "Chicken Milanese", "Chicken Parm", "Chicken Wings", "Chilli con Carne", "Ebiten maki",
    "Fettuccine Alfredo", "Fish and Chips", "French Fries with Sausages", "French Toast",
    "Hummus", "Katsu Curry", "Kebab", "Lasagne", "Linguine with Clams", "Massaman Curry",
    "Meatballs with Sauce", "Mushroom Risotto", "Pappardelle alla Bolognese", "Pasta Carbonara",
    "Pasta and Beans", "Pasta with Tomato and Basil", "Peking Duck", "Philadelphia Maki",
    "Pho", "Pierogi", "Pizza", "Poke", "Pork Belly Buns", "Pork Sausage Roll", "Poutine",
    "Ricotta Stuffed Ravioli", "Risotto with Seafood", "Salmon Nigiri", "Scotch Eggs",
    "Seafood Paella", "Som Tam", "Souvlaki", "Stinky Tofu", "Sushi", "Tacos", "Teriyaki Chicken",
    "Tiramisù", "Tuna Sashimi", "Vegetable Soup",
];

pub const DISH_DESCRIPTIONS: &[&str] = &[
    "Two eggs, bacon or sausage, toast, and your choice of hash browns or home fries.",
    "Creamy mascarpone layered between espresso-soaked ladyfingers.",
    "Slow-cooked for hours in our house spice blend, served with rice.",
    "Hand-rolled fresh pasta tossed in a rich, velvety sauce.",
    "Crispy on the outside, tender on the inside, finished with sea salt.",
    "A bright, crunchy salad dressed with citrus vinaigrette.",
    "Grilled over charcoal and brushed with a smoky glaze.",
    "Our grandmother's recipe, unchanged since the restaurant opened.",
    "Light and fragrant broth simmered with herbs and aromatics.",
    "Stone-baked with seasonal toppings and a blistered crust.",
    "Served with a side of pickled vegetables and warm flatbread.",
    "A generous portion, perfect for sharing with the table.",
    "Tossed in a sweet and spicy sauce, topped with sesame seeds.",
    "Lightly battered and fried until golden, with a tangy dip.",
    "Layers of flavour built on a slow-roasted tomato base.",
    "Fresh catch of the day, pan-seared and finished with butter.",
    "Hearty and warming, ideal for a cold evening.",
    "Delicately rolled and garnished with fresh herbs.",
];

pub const INGREDIENTS: &[&str] = &[
    "Achacha", "Almonds", "Anchovies", "Apples", "Arborio Rice", "Artichokes", "Asparagus",
    "Avocado", "Bacon", "Balsamic Vinegar", "Basil", "Bay Leaves", "Bean Sprouts", "Beef Mince",
    "Beetroot", "Black Beans", "Bok Choy", "Brie", "Broccoli", "Brown Sugar", "Butter",
    "Buttermilk", "Cabbage", "Capers", "Capsicum", "Cardamom", "Carrots", "Cashews",
    "Cauliflower", "Celery", "Cheddar", "Chickpeas", "Chicken Breast", "Chilli Flakes",
    "Chives", "Cinnamon", "Coconut Milk", "Coriander", "Corn", "Courgette", "Cream",
    "Cucumber", "Cumin", "Dark Chocolate", "Dill", "Eggplant", "Eggs", "Feta", "Fish Sauce",
    "Flour", "Garlic", "Ginger", "Gruyère", "Honey", "Kale", "Leeks", "Lemongrass", "Lemons",
    "Lentils", "Limes", "Mascarpone", "Mint", "Mozzarella", "Mushrooms", "Mussels",
    "Nutmeg", "Olive Oil", "Onions", "Oregano", "Oyster Sauce", "Paprika", "Parmesan",
    "Parsley", "Peanuts", "Pine Nuts", "Pork Belly", "Potatoes", "Prawns", "Pumpkin",
    "Red Onion", "Rice Noodles", "Ricotta", "Rosemary", "Saffron", "Salmon", "Sesame Oil",
    "Shallots", "Soy Sauce", "Spinach", "Spring Onions", "Squid", "Star Anise", "Sweet Potato",
    "Thyme", "Tofu", "Tomatoes", "Tuna", "Turmeric", "Vanilla", "Walnuts", "Yoghurt",
];

fn pick<R: Rng>(rng: &mut R, words: &[&'static str]) -> &'static str {
    words.choose(rng).copied().unwrap_or_default()
}

pub fn ethnic_category<R: Rng>(rng: &mut R) -> String {
    pick(rng, ETHNIC_CATEGORIES).to_string()
}

pub fn dish<R: Rng>(rng: &mut R) -> String {
    pick(rng, DISHES).to_string()
}

pub fn dish_description<R: Rng>(rng: &mut R) -> String {
    pick(rng, DISH_DESCRIPTIONS).to_string()
}

pub fn ingredient<R: Rng>(rng: &mut R) -> String {
    pick(rng, INGREDIENTS).to_string()
}
