use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum MealPlan {
    Table,
    UserId,
    Date,
    MealType,
    Title,
    Description,
    ImageReference,
    Ingredients,
    Instructions,
    PrepTime,
    Servings,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum ShoppingChecked {
    Table,
    UserId,
    Ingredient,
    Checked,
}

#[derive(Iden, Clone)]
pub enum Recipe {
    Table,
    Id,
    UserId,
    Title,
    Description,
    ImageReference,
    Ingredients,
    Instructions,
    PrepTime,
    Servings,
    CreatedAt,
    UpdatedAt,
}
