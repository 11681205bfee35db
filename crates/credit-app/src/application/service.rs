use std::sync::Arc;

use tracing::{info, info_span, warn};

use super::decision::CreditApplicationDecision;
use super::domain::CreditApplication;
use super::policy::CreditPolicy;
use super::rating::{round_for_display, CreditRating, CreditRatingCalculator};
use super::scoring::{PersonScoringSelector, ScoringSelector};
use super::validation::{CompoundPostValidator, PostScoringValidator};

/// Service wired with the built-in scoring bundles, rating calculator and post-scoring checks.
pub type StandardCreditApplicationService =
    CreditApplicationService<PersonScoringSelector, CreditRatingCalculator, CompoundPostValidator>;

/// Service composing scoring, post-scoring validation and rating into a single decision.
pub struct CreditApplicationService<S, R, V> {
    selector: Arc<S>,
    rating: Arc<R>,
    validator: Arc<V>,
    negative_scoring_threshold: u32,
    contact_required_ceiling: u32,
}

impl StandardCreditApplicationService {
    pub fn standard(policy: &CreditPolicy) -> Self {
        Self::new(
            Arc::new(PersonScoringSelector::default()),
            Arc::new(CreditRatingCalculator::from_policy(policy)),
            Arc::new(CompoundPostValidator::from_policy(policy)),
            policy,
        )
    }
}

impl<S, R, V> CreditApplicationService<S, R, V>
where
    S: ScoringSelector + 'static,
    R: CreditRating + 'static,
    V: PostScoringValidator + 'static,
{
    pub fn new(selector: Arc<S>, rating: Arc<R>, validator: Arc<V>, policy: &CreditPolicy) -> Self {
        Self {
            selector,
            rating,
            validator,
            negative_scoring_threshold: policy.negative_scoring_threshold,
            contact_required_ceiling: policy.contact_required_ceiling,
        }
    }

    /// Run the decision pipeline for one already-validated application.
    ///
    /// Business-rule failures are part of the outcome, never returned as errors.
    pub fn decide(&self, application: &CreditApplication) -> CreditApplicationDecision {
        let person = &application.person;
        let purpose = &application.purpose_of_loan;
        let span = info_span!(
            "credit_decision",
            applicant = person.kind().label(),
            loan = purpose.kind.label(),
            period_months = purpose.period_months,
            amount = %purpose.amount,
        );
        let _entered = span.enter();

        let personal_data = person.personal_data().clone();
        let scoring = self.selector.select(person).score_application(application);
        info!(scoring, "calculated scoring");

        if scoring < self.negative_scoring_threshold {
            return CreditApplicationDecision::negative_scoring(personal_data, scoring);
        }

        if scoring <= self.contact_required_ceiling {
            return CreditApplicationDecision::contact_required(personal_data, scoring);
        }

        if let Err(requirement) = self.validator.validate(application, scoring) {
            warn!(cause = ?requirement.cause(), %requirement, "post-scoring requirement not met");
            return CreditApplicationDecision::requirements_not_met(
                personal_data,
                scoring,
                requirement,
            );
        }

        let rating = self.rating.rate(application);
        if rating < purpose.amount {
            info!(
                rating = %round_for_display(rating),
                requested = %purpose.amount,
                "rating below requested amount"
            );
            return CreditApplicationDecision::negative_rating(personal_data, scoring, rating);
        }

        CreditApplicationDecision::positive(personal_data, scoring, rating)
    }
}
