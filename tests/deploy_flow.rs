//! End-to-end deployment scenarios over in-memory backends

use neurodeploy::artifact::{ExportError, ModelBytes, PreprocessingScript};
use neurodeploy::deploy::{
    ArtifactKind, ArtifactUploader, DeployError, DeployOptions, DeployReport, Deployer,
    DeploymentTarget, GrantBundle, GrantIssuer, UploadGrant, UploadOutcome, UPLOAD_ACCEPTED,
};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

fn grant(url: &str) -> UploadGrant {
    let mut fields = BTreeMap::new();
    fields.insert("key".to_string(), "uploads/artifact".to_string());
    fields.insert("x-amz-signature".to_string(), "sig".to_string());
    UploadGrant { url: url.to_string(), fields }
}

/// Grant backend handing out numbered single-use grants.
struct GrantDesk {
    with_preprocessing: bool,
    requests: Rc<RefCell<Vec<DeploymentTarget>>>,
}

impl GrantIssuer for GrantDesk {
    fn request_grant(
        &self,
        target: &DeploymentTarget,
        _token: &str,
    ) -> Result<GrantBundle, DeployError> {
        self.requests.borrow_mut().push(target.clone());
        let n = self.requests.borrow().len();
        Ok(GrantBundle {
            model: grant(&format!("https://storage.test/model-{n}")),
            preprocessing: self
                .with_preprocessing
                .then(|| grant(&format!("https://storage.test/preprocessing-{n}"))),
        })
    }
}

/// Upload backend recording every transfer and accepting them all.
struct AcceptingStorage {
    uploads: Rc<RefCell<Vec<(ArtifactKind, String, PathBuf, bool)>>>,
}

impl ArtifactUploader for AcceptingStorage {
    fn upload(
        &self,
        grant: &UploadGrant,
        artifact: ArtifactKind,
        path: &Path,
    ) -> Result<UploadOutcome, DeployError> {
        self.uploads.borrow_mut().push((
            artifact,
            grant.url.clone(),
            path.to_path_buf(),
            path.exists(),
        ));
        Ok(UploadOutcome { artifact, status: UPLOAD_ACCEPTED, body: String::new() })
    }
}

fn harness(
    with_preprocessing: bool,
) -> (
    Deployer<GrantDesk, AcceptingStorage>,
    Rc<RefCell<Vec<DeploymentTarget>>>,
    Rc<RefCell<Vec<(ArtifactKind, String, PathBuf, bool)>>>,
) {
    let requests = Rc::new(RefCell::new(Vec::new()));
    let uploads = Rc::new(RefCell::new(Vec::new()));
    let deployer = Deployer::with_backends(
        GrantDesk { with_preprocessing, requests: Rc::clone(&requests) },
        AcceptingStorage { uploads: Rc::clone(&uploads) },
    );
    (deployer, requests, uploads)
}

#[test]
fn deploy_iris_classifier_without_preprocessing() {
    // Even though the desk hands out an unsolicited preprocessing grant,
    // nothing must consume it.
    let (deployer, requests, uploads) = harness(true);
    let model = ModelBytes::new(b"h5 weights".to_vec());

    let report: DeployReport = deployer
        .deploy("iris-classifier", &model, "token", &DeployOptions::default())
        .unwrap();

    let requests = requests.borrow();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].name, "iris-classifier");
    assert_eq!(requests[0].lib, "tensorflow");
    assert_eq!(requests[0].filetype, "h5");
    assert!(!requests[0].is_public);
    assert!(!requests[0].has_preprocessing);

    let uploads = uploads.borrow();
    assert_eq!(uploads.len(), 1);
    assert_eq!(uploads[0].0, ArtifactKind::Model);
    assert!(uploads[0].3, "artifact file must exist at upload time");

    assert!(report.model.succeeded());
    assert!(report.preprocessing.is_none());
    assert!(!uploads[0].2.exists(), "temp artifacts must be removed");
}

#[test]
fn deploy_with_preprocessing_uploads_both_artifacts() {
    let (deployer, requests, uploads) = harness(true);
    let model = ModelBytes::new(b"h5 weights".to_vec());
    let script = PreprocessingScript::parse("def preprocess(x):\n    return x\n").unwrap();
    let options = DeployOptions::default().with_preprocessing(script);

    let report = deployer.deploy("iris-classifier", &model, "token", &options).unwrap();

    assert!(requests.borrow()[0].has_preprocessing);

    let uploads = uploads.borrow();
    assert_eq!(uploads.len(), 2);
    assert_eq!(uploads[0].0, ArtifactKind::Model);
    assert_eq!(uploads[1].0, ArtifactKind::Preprocessing);

    assert_eq!(report.outcomes().count(), 2);
    assert!(report.outcomes().all(UploadOutcome::succeeded));

    for (_, _, path, existed) in uploads.iter() {
        assert!(existed);
        assert!(!path.exists(), "temp artifacts must be removed");
    }
}

#[test]
fn misnamed_preprocessing_fails_before_any_call() {
    let (deployer, requests, uploads) = harness(true);

    // The script never becomes a deployable option.
    let err = PreprocessingScript::parse("def clean_data(x):\n    return x\n").unwrap_err();
    assert!(matches!(err, ExportError::NamingConvention { .. }));

    // Nothing reached the network, and no deploy call was ever made.
    drop(deployer);
    assert!(requests.borrow().is_empty());
    assert!(uploads.borrow().is_empty());
}

#[test]
fn missing_preprocessing_grant_surfaces_after_model_upload() {
    let (deployer, _requests, uploads) = harness(false);
    let model = ModelBytes::new(b"h5 weights".to_vec());
    let script = PreprocessingScript::parse("def preprocess(x):\n    return x\n").unwrap();
    let options = DeployOptions::default().with_preprocessing(script);

    let err = deployer.deploy("iris-classifier", &model, "token", &options).unwrap_err();
    assert!(matches!(err, DeployError::PreprocessingGrantMissing));

    let uploads = uploads.borrow();
    assert_eq!(uploads.len(), 1, "model upload precedes the violation");
    assert!(!uploads[0].2.exists(), "cleanup must run on the failure path");
}

#[test]
fn stale_grants_stay_usable_after_newer_requests() {
    let requests = Rc::new(RefCell::new(Vec::new()));
    let desk = GrantDesk { with_preprocessing: false, requests: Rc::clone(&requests) };
    let target = DeployOptions::default().target_for("iris-classifier");

    let first = desk.request_grant(&target, "token").unwrap();
    let second = desk.request_grant(&target, "token").unwrap();

    // Two requests for the same target yield independent grants.
    assert_ne!(first.model, second.model);

    // Consuming the first (stale) grant still succeeds on its own terms.
    let uploads = Rc::new(RefCell::new(Vec::new()));
    let storage = AcceptingStorage { uploads: Rc::clone(&uploads) };
    let file = tempfile::NamedTempFile::new().unwrap();
    std::fs::write(file.path(), b"weights").unwrap();

    let outcome = storage.upload(&first.model, ArtifactKind::Model, file.path()).unwrap();
    assert!(outcome.succeeded());
    assert_eq!(uploads.borrow()[0].1, first.model.url);
}
