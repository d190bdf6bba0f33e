/// Use cases module containing application business logic orchestration
mod mavenize_bundles;

pub use mavenize_bundles::MavenizeBundlesUseCase;
