//! In-process store. Each pair check and insert runs under a single write lock.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::errors::AppError;
use crate::models::job_offer::JobOffer;
use crate::models::recommendation::{
    JobRecommendation, RecommendationPreferences, RecommendationStatus, SeekerProfileMatch,
};
use crate::models::seeker::JobSeekerProfile;
use crate::store::{JobOfferRepository, RecommendationRepository, SeekerRepository};

type PairKey = (String, String);

#[derive(Default)]
struct Catalogue {
    job_offers: Vec<JobOffer>,
    seekers: Vec<JobSeekerProfile>,
}

#[derive(Default)]
struct Records {
    recommendations: Vec<JobRecommendation>,
    recommendation_pairs: HashSet<PairKey>,
    matches: Vec<SeekerProfileMatch>,
    match_pairs: HashSet<PairKey>,
    preferences: HashMap<String, RecommendationPreferences>,
}

#[derive(Default)]
pub struct MemoryStore {
    catalogue: RwLock<Catalogue>,
    records: RwLock<Records>,
}

fn pair(seeker_id: &str, job_offer_id: &str) -> PairKey {
    (seeker_id.to_string(), job_offer_id.to_string())
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalogue(job_offers: Vec<JobOffer>, seekers: Vec<JobSeekerProfile>) -> Self {
        Self {
            catalogue: RwLock::new(Catalogue {
                job_offers,
                seekers,
            }),
            records: RwLock::new(Records::default()),
        }
    }

    /// Inserts or replaces a job offer by id.
    #[cfg(test)]
    pub async fn put_job_offer(&self, job: JobOffer) {
        let mut catalogue = self.catalogue.write().await;
        match catalogue.job_offers.iter_mut().find(|j| j.id == job.id) {
            Some(existing) => *existing = job,
            None => catalogue.job_offers.push(job),
        }
    }
}

#[async_trait]
impl JobOfferRepository for MemoryStore {
    async fn job_offers(&self) -> Result<Vec<JobOffer>, AppError> {
        Ok(self.catalogue.read().await.job_offers.clone())
    }

    async fn job_offer_by_id(&self, id: &str) -> Result<Option<JobOffer>, AppError> {
        let catalogue = self.catalogue.read().await;
        Ok(catalogue.job_offers.iter().find(|j| j.id == id).cloned())
    }
}

#[async_trait]
impl SeekerRepository for MemoryStore {
    async fn job_seekers(&self) -> Result<Vec<JobSeekerProfile>, AppError> {
        Ok(self.catalogue.read().await.seekers.clone())
    }

    async fn job_seeker_by_id(&self, id: &str) -> Result<Option<JobSeekerProfile>, AppError> {
        let catalogue = self.catalogue.read().await;
        Ok(catalogue.seekers.iter().find(|s| s.id == id).cloned())
    }
}

#[async_trait]
impl RecommendationRepository for MemoryStore {
    async fn recommendations_for_seeker(
        &self,
        seeker_id: &str,
    ) -> Result<Vec<JobRecommendation>, AppError> {
        let records = self.records.read().await;
        Ok(records
            .recommendations
            .iter()
            .filter(|r| r.seeker_id == seeker_id)
            .cloned()
            .collect())
    }

    async fn insert_recommendation_if_absent(
        &self,
        recommendation: &JobRecommendation,
    ) -> Result<bool, AppError> {
        let mut records = self.records.write().await;
        let key = pair(&recommendation.seeker_id, &recommendation.job_offer_id);
        if !records.recommendation_pairs.insert(key) {
            return Ok(false);
        }
        records.recommendations.push(recommendation.clone());
        Ok(true)
    }

    async fn update_recommendation_status(
        &self,
        id: &str,
        status: RecommendationStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<JobRecommendation>, AppError> {
        let mut records = self.records.write().await;
        Ok(records
            .recommendations
            .iter_mut()
            .find(|r| r.id == id)
            .map(|r| {
                r.status = status;
                r.updated_at = updated_at;
                r.clone()
            }))
    }

    async fn matches_for_job(
        &self,
        job_offer_id: &str,
    ) -> Result<Vec<SeekerProfileMatch>, AppError> {
        let records = self.records.read().await;
        Ok(records
            .matches
            .iter()
            .filter(|m| m.job_offer_id == job_offer_id)
            .cloned()
            .collect())
    }

    async fn insert_match_if_absent(
        &self,
        profile_match: &SeekerProfileMatch,
    ) -> Result<bool, AppError> {
        let mut records = self.records.write().await;
        let key = pair(&profile_match.seeker_id, &profile_match.job_offer_id);
        if !records.match_pairs.insert(key) {
            return Ok(false);
        }
        records.matches.push(profile_match.clone());
        Ok(true)
    }

    async fn preferences(
        &self,
        seeker_id: &str,
    ) -> Result<Option<RecommendationPreferences>, AppError> {
        Ok(self.records.read().await.preferences.get(seeker_id).cloned())
    }

    async fn save_preferences(
        &self,
        preferences: &RecommendationPreferences,
    ) -> Result<(), AppError> {
        self.records
            .write()
            .await
            .preferences
            .insert(preferences.seeker_id.clone(), preferences.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::recommendation::MatchReason;
    use crate::store::demo;

    fn make_recommendation(id: &str, seeker_id: &str, job_offer_id: &str) -> JobRecommendation {
        let now = Utc::now();
        JobRecommendation {
            id: id.into(),
            job_offer_id: job_offer_id.into(),
            seeker_id: seeker_id.into(),
            match_score: 75,
            match_reasons: Vec::<MatchReason>::new(),
            status: RecommendationStatus::New,
            created_at: now,
            updated_at: now,
        }
    }

    fn make_match(seeker_id: &str, job_offer_id: &str) -> SeekerProfileMatch {
        SeekerProfileMatch {
            seeker_id: seeker_id.into(),
            job_offer_id: job_offer_id.into(),
            match_score: 70,
            skill_matches: vec![],
            experience_match: 90,
            location_match: 100,
            salary_match: 50,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_insert_recommendation_rejects_duplicate_pair() {
        let store = MemoryStore::new();
        assert!(store
            .insert_recommendation_if_absent(&make_recommendation("a", "1", "1"))
            .await
            .unwrap());
        assert!(!store
            .insert_recommendation_if_absent(&make_recommendation("b", "1", "1"))
            .await
            .unwrap());
        assert!(store
            .insert_recommendation_if_absent(&make_recommendation("c", "1", "2"))
            .await
            .unwrap());

        let recs = store.recommendations_for_seeker("1").await.unwrap();
        let ids: Vec<&str> = recs.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[tokio::test]
    async fn test_concurrent_inserts_keep_one_record_per_pair() {
        let store = std::sync::Arc::new(MemoryStore::new());
        let mut handles = Vec::new();
        for i in 0..16 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .insert_recommendation_if_absent(&make_recommendation(
                        &format!("rec-{i}"),
                        "1",
                        "1",
                    ))
                    .await
                    .unwrap()
            }));
        }
        let mut inserted = 0;
        for handle in handles {
            if handle.await.unwrap() {
                inserted += 1;
            }
        }
        assert_eq!(inserted, 1);
        assert_eq!(store.recommendations_for_seeker("1").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_status_unknown_id_leaves_store_untouched() {
        let store = MemoryStore::new();
        store
            .insert_recommendation_if_absent(&make_recommendation("a", "1", "1"))
            .await
            .unwrap();
        let result = store
            .update_recommendation_status("missing", RecommendationStatus::Saved, Utc::now())
            .await
            .unwrap();
        assert!(result.is_none());
        let recs = store.recommendations_for_seeker("1").await.unwrap();
        assert_eq!(recs[0].status, RecommendationStatus::New);
    }

    #[tokio::test]
    async fn test_update_status_overwrites_status_and_timestamp() {
        let store = MemoryStore::new();
        let rec = make_recommendation("a", "1", "1");
        store.insert_recommendation_if_absent(&rec).await.unwrap();
        let later = rec.updated_at + chrono::Duration::minutes(5);
        let updated = store
            .update_recommendation_status("a", RecommendationStatus::Applied, later)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.status, RecommendationStatus::Applied);
        assert_eq!(updated.updated_at, later);
        assert_eq!(updated.created_at, rec.created_at);
    }

    #[tokio::test]
    async fn test_insert_match_rejects_duplicate_pair() {
        let store = MemoryStore::new();
        assert!(store.insert_match_if_absent(&make_match("1", "1")).await.unwrap());
        assert!(!store.insert_match_if_absent(&make_match("1", "1")).await.unwrap());
        assert!(store.insert_match_if_absent(&make_match("2", "1")).await.unwrap());
        assert_eq!(store.matches_for_job("1").await.unwrap().len(), 2);
        assert!(store.matches_for_job("2").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_catalogue_lookup_and_replace() {
        let store = MemoryStore::with_catalogue(demo::job_offers(), demo::job_seekers());
        assert_eq!(store.job_offers().await.unwrap().len(), 4);
        assert!(store.job_offer_by_id("9").await.unwrap().is_none());

        let mut job = store.job_offer_by_id("2").await.unwrap().unwrap();
        job.title = "Senior Backend Engineer".into();
        store.put_job_offer(job).await;
        assert_eq!(store.job_offers().await.unwrap().len(), 4);
        assert_eq!(
            store.job_offer_by_id("2").await.unwrap().unwrap().title,
            "Senior Backend Engineer"
        );

        assert!(store.job_seeker_by_id("1").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_preferences_round_trip() {
        let store = MemoryStore::new();
        assert!(store.preferences("1").await.unwrap().is_none());
        let mut prefs = RecommendationPreferences::defaults_for("1", Utc::now());
        prefs.minimum_match_score = 75;
        store.save_preferences(&prefs).await.unwrap();
        assert_eq!(store.preferences("1").await.unwrap(), Some(prefs));
    }
}
