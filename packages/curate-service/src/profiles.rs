use serde::Serialize;

use curate_domain::{Profile, ProfileWeights, SkillLevel};

use crate::CurateService;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInfo {
	pub name: Profile,
	pub weights: &'static ProfileWeights,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilesResponse {
	pub profiles: Vec<ProfileInfo>,
	pub skill_levels: Vec<SkillLevel>,
	pub default_profile: Profile,
	pub result_limit: u32,
}

impl CurateService {
	pub fn profiles(&self) -> ProfilesResponse {
		ProfilesResponse {
			profiles: Profile::ALL
				.into_iter()
				.map(|profile| ProfileInfo { name: profile, weights: profile.weights() })
				.collect(),
			skill_levels: SkillLevel::ALL.to_vec(),
			default_profile: Profile::Casual,
			result_limit: self.cfg.ranking.result_limit,
		}
	}
}
