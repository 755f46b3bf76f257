//! Typed Kubernetes manifests
//!
//! Each supported kind is a closed serde struct serialized with
//! serde_yaml; optional fields are omitted rather than emitted empty.
//! Labels default to `app: <name>` and drive selectors.

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::core::model::{Meta, ResultItem, ResultSet};
use crate::core::render::{emit, EmitOptions, RenderConfig};
use crate::core::util::{hash_bytes, HashAlgorithm};

pub type Labels = BTreeMap<String, String>;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: Labels,
}

impl ObjectMeta {
    fn new(name: &str, namespace: Option<String>, labels: Labels) -> Self {
        Self {
            name: name.to_string(),
            namespace,
            labels,
        }
    }
}

/// Fill in the `app: <name>` default when no labels were given
pub fn labels_or_default(name: &str, labels: Labels) -> Labels {
    if labels.is_empty() {
        let mut defaulted = BTreeMap::new();
        defaulted.insert("app".to_string(), name.to_string());
        defaulted
    } else {
        labels
    }
}

// ---------- Deployment ----------

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    pub api_version: String,
    pub kind: String,
    pub metadata: ObjectMeta,
    pub spec: DeploymentSpec,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentSpec {
    pub replicas: u32,
    pub selector: LabelSelector,
    pub template: PodTemplateSpec,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelSelector {
    pub match_labels: Labels,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PodTemplateSpec {
    pub metadata: TemplateMeta,
    pub spec: PodSpec,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateMeta {
    pub labels: Labels,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PodSpec {
    pub containers: Vec<Container>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    pub name: String,
    pub image: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<ContainerPort>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub env: Vec<EnvVar>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerPort {
    pub container_port: u16,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvVar {
    pub name: String,
    pub value: String,
}

#[allow(clippy::too_many_arguments)]
pub fn deployment(
    name: &str,
    image: &str,
    replicas: u32,
    port: Option<u16>,
    namespace: Option<String>,
    labels: Labels,
    env: Vec<(String, String)>,
) -> Deployment {
    let labels = labels_or_default(name, labels);

    Deployment {
        api_version: "apps/v1".to_string(),
        kind: "Deployment".to_string(),
        metadata: ObjectMeta::new(name, namespace, labels.clone()),
        spec: DeploymentSpec {
            replicas,
            selector: LabelSelector {
                match_labels: labels.clone(),
            },
            template: PodTemplateSpec {
                metadata: TemplateMeta { labels },
                spec: PodSpec {
                    containers: vec![Container {
                        name: name.to_string(),
                        image: image.to_string(),
                        ports: port
                            .map(|p| vec![ContainerPort { container_port: p }])
                            .unwrap_or_default(),
                        env: env
                            .into_iter()
                            .map(|(name, value)| EnvVar { name, value })
                            .collect(),
                    }],
                },
            },
        },
    }
}

// ---------- Service ----------

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub api_version: String,
    pub kind: String,
    pub metadata: ObjectMeta,
    pub spec: ServiceSpec,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSpec {
    #[serde(rename = "type")]
    pub service_type: String,
    pub selector: Labels,
    pub ports: Vec<ServicePort>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePort {
    pub port: u16,
    pub target_port: u16,
    pub protocol: String,
}

pub fn service(
    name: &str,
    port: u16,
    target_port: Option<u16>,
    service_type: &str,
    namespace: Option<String>,
    labels: Labels,
) -> Service {
    let labels = labels_or_default(name, labels);

    Service {
        api_version: "v1".to_string(),
        kind: "Service".to_string(),
        metadata: ObjectMeta::new(name, namespace, labels.clone()),
        spec: ServiceSpec {
            service_type: service_type.to_string(),
            selector: labels,
            ports: vec![ServicePort {
                port,
                target_port: target_port.unwrap_or(port),
                protocol: "TCP".to_string(),
            }],
        },
    }
}

// ---------- ConfigMap / Secret / Namespace ----------

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigMap {
    pub api_version: String,
    pub kind: String,
    pub metadata: ObjectMeta,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub data: BTreeMap<String, String>,
}

pub fn config_map(
    name: &str,
    namespace: Option<String>,
    labels: Labels,
    data: BTreeMap<String, String>,
) -> ConfigMap {
    ConfigMap {
        api_version: "v1".to_string(),
        kind: "ConfigMap".to_string(),
        metadata: ObjectMeta::new(name, namespace, labels_or_default(name, labels)),
        data,
    }
}

/// Secrets use stringData so values need no encoding step
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Secret {
    pub api_version: String,
    pub kind: String,
    pub metadata: ObjectMeta,
    #[serde(rename = "type")]
    pub secret_type: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub string_data: BTreeMap<String, String>,
}

pub fn secret(
    name: &str,
    namespace: Option<String>,
    labels: Labels,
    data: BTreeMap<String, String>,
) -> Secret {
    Secret {
        api_version: "v1".to_string(),
        kind: "Secret".to_string(),
        metadata: ObjectMeta::new(name, namespace, labels_or_default(name, labels)),
        secret_type: "Opaque".to_string(),
        string_data: data,
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Namespace {
    pub api_version: String,
    pub kind: String,
    pub metadata: ObjectMeta,
}

pub fn namespace(name: &str, labels: Labels) -> Namespace {
    Namespace {
        api_version: "v1".to_string(),
        kind: "Namespace".to_string(),
        metadata: ObjectMeta::new(name, None, labels_or_default(name, labels)),
    }
}

// ---------- Ingress ----------

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingress {
    pub api_version: String,
    pub kind: String,
    pub metadata: ObjectMeta,
    pub spec: IngressSpec,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngressSpec {
    pub rules: Vec<IngressRule>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngressRule {
    pub host: String,
    pub http: HttpIngressRuleValue,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpIngressRuleValue {
    pub paths: Vec<HttpIngressPath>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpIngressPath {
    pub path: String,
    pub path_type: String,
    pub backend: IngressBackend,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngressBackend {
    pub service: IngressServiceBackend,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngressServiceBackend {
    pub name: String,
    pub port: ServiceBackendPort,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceBackendPort {
    pub number: u16,
}

#[allow(clippy::too_many_arguments)]
pub fn ingress(
    name: &str,
    host: &str,
    service_name: &str,
    service_port: u16,
    path: &str,
    namespace: Option<String>,
    labels: Labels,
) -> Ingress {
    Ingress {
        api_version: "networking.k8s.io/v1".to_string(),
        kind: "Ingress".to_string(),
        metadata: ObjectMeta::new(name, namespace, labels_or_default(name, labels)),
        spec: IngressSpec {
            rules: vec![IngressRule {
                host: host.to_string(),
                http: HttpIngressRuleValue {
                    paths: vec![HttpIngressPath {
                        path: path.to_string(),
                        path_type: "Prefix".to_string(),
                        backend: IngressBackend {
                            service: IngressServiceBackend {
                                name: service_name.to_string(),
                                port: ServiceBackendPort {
                                    number: service_port,
                                },
                            },
                        },
                    }],
                },
            }],
        },
    }
}

/// Serialize any manifest to YAML
pub fn to_yaml<T: Serialize>(manifest: &T) -> Result<String> {
    serde_yaml::to_string(manifest).context("Failed to serialize manifest to YAML")
}

/// Run a k8s command: emit one manifest item
pub fn run_manifest(
    label: &str,
    yaml: String,
    config: RenderConfig,
    emit_opts: &EmitOptions,
) -> Result<()> {
    let meta = Meta {
        output_bytes: Some(yaml.len() as u64),
        hash: Some(hash_bytes(yaml.as_bytes(), HashAlgorithm::Xxh3)),
        ..Default::default()
    };

    let mut result_set = ResultSet::new();
    result_set.push(ResultItem::manifest(label, yaml).with_meta(meta));

    emit(&result_set, config, emit_opts)
}
