use crate::core::error::ModelError;
use crate::core::model::ForearmLeverModel;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

/// The two inputs that fix a model's anatomy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubjectConfig {
    pub body_mass: f64,
    pub forearm_length: f64,
}

/// The reconfigurable part of a session. Both values default to zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PostureConfig {
    pub shoulder_angle_deg: f64,
    pub load_mass: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    pub subject: SubjectConfig,
    pub posture: PostureConfig,
}

impl SessionConfig {
    /// Builds a model for the subject and applies the posture to it.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidParameter`] if body mass or forearm length is not a
    /// positive, finite number.
    pub fn build_model(&self) -> Result<ForearmLeverModel, ModelError> {
        let mut model =
            ForearmLeverModel::try_new(self.subject.body_mass, self.subject.forearm_length)?;
        model.set_shoulder_angle(self.posture.shoulder_angle_deg);
        model.set_load(self.posture.load_mass);
        Ok(model)
    }
}

#[derive(Default)]
pub struct SessionConfigBuilder {
    body_mass: Option<f64>,
    forearm_length: Option<f64>,
    shoulder_angle_deg: Option<f64>,
    load_mass: Option<f64>,
}

impl SessionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn body_mass(mut self, kg: f64) -> Self {
        self.body_mass = Some(kg);
        self
    }
    pub fn forearm_length(mut self, meters: f64) -> Self {
        self.forearm_length = Some(meters);
        self
    }
    pub fn shoulder_angle_deg(mut self, degrees: f64) -> Self {
        self.shoulder_angle_deg = Some(degrees);
        self
    }
    pub fn load_mass(mut self, kg: f64) -> Self {
        self.load_mass = Some(kg);
        self
    }

    pub fn build(self) -> Result<SessionConfig, ConfigError> {
        let defaults = PostureConfig::default();
        let subject = SubjectConfig {
            body_mass: self
                .body_mass
                .ok_or(ConfigError::MissingParameter("body_mass"))?,
            forearm_length: self
                .forearm_length
                .ok_or(ConfigError::MissingParameter("forearm_length"))?,
        };
        let posture = PostureConfig {
            shoulder_angle_deg: self
                .shoulder_angle_deg
                .unwrap_or(defaults.shoulder_angle_deg),
            load_mass: self.load_mass.unwrap_or(defaults.load_mass),
        };
        Ok(SessionConfig { subject, posture })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_requires_subject_parameters() {
        assert_eq!(
            SessionConfigBuilder::new().forearm_length(0.3).build(),
            Err(ConfigError::MissingParameter("body_mass"))
        );
        assert_eq!(
            SessionConfigBuilder::new().body_mass(70.0).build(),
            Err(ConfigError::MissingParameter("forearm_length"))
        );
    }

    #[test]
    fn build_defaults_posture_to_zero() {
        let config = SessionConfigBuilder::new()
            .body_mass(70.0)
            .forearm_length(0.3)
            .build()
            .unwrap();
        assert_eq!(config.posture, PostureConfig::default());
        assert_eq!(config.posture.shoulder_angle_deg, 0.0);
        assert_eq!(config.posture.load_mass, 0.0);
    }

    #[test]
    fn build_model_applies_posture() {
        let config = SessionConfigBuilder::new()
            .body_mass(70.0)
            .forearm_length(0.3)
            .shoulder_angle_deg(40.0)
            .load_mass(5.0)
            .build()
            .unwrap();
        let model = config.build_model().unwrap();
        assert_eq!(model.shoulder_angle_deg(), 40.0);
        assert_eq!(model.load_mass(), 5.0);
        assert_eq!(model.body_mass(), 70.0);
    }

    #[test]
    fn build_model_rejects_invalid_subject() {
        let config = SessionConfigBuilder::new()
            .body_mass(-70.0)
            .forearm_length(0.3)
            .build()
            .unwrap();
        assert!(matches!(
            config.build_model(),
            Err(ModelError::InvalidParameter {
                name: "body_mass",
                ..
            })
        ));
    }
}
