use mealdeck_shared::MealPlan;

/// Read access to every meal plan a user owns. Window filtering happens in
/// the caller, not in the source.
#[async_trait::async_trait]
pub trait MealPlanSource: Send + Sync {
    async fn all(&self, user_id: &str) -> anyhow::Result<Vec<MealPlan>>;
}

#[async_trait::async_trait]
impl MealPlanSource for Vec<MealPlan> {
    async fn all(&self, user_id: &str) -> anyhow::Result<Vec<MealPlan>> {
        Ok(self
            .iter()
            .filter(|plan| plan.user_id == user_id)
            .cloned()
            .collect())
    }
}
