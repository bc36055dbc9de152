//! Kubernetes environment introspection.
//!
//! The deployment manifest injects `KUBERNETES_NAMESPACE`, `POD_IP`, and
//! `NODE_IP` via the downward API; `HOSTNAME` carries the pod name. Every
//! value has a fixed placeholder so the service runs unchanged outside a
//! cluster.

use common::protocol::KubernetesInfo;

/// Snapshot of the Kubernetes-related process environment.
///
/// Pure read of environment variables, evaluated per request.
pub fn from_env() -> KubernetesInfo {
    from_lookup(|name| std::env::var(name).ok())
}

/// Build a [`KubernetesInfo`] from an arbitrary variable source.
///
/// Split out from [`from_env`] so tests can supply their own environment
/// without mutating process-global state.
fn from_lookup<F>(lookup: F) -> KubernetesInfo
where
    F: Fn(&str) -> Option<String>,
{
    KubernetesInfo {
        namespace: lookup("KUBERNETES_NAMESPACE").unwrap_or_else(|| "unknown".into()),
        pod_name: lookup("HOSTNAME").unwrap_or_else(|| "local".into()),
        pod_ip: lookup("POD_IP").unwrap_or_else(|| "127.0.0.1".into()),
        node_ip: lookup("NODE_IP").unwrap_or_else(|| "unknown".into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_apply_when_unset() {
        let info = from_lookup(|_| None);
        assert_eq!(info.namespace, "unknown");
        assert_eq!(info.pod_name, "local");
        assert_eq!(info.pod_ip, "127.0.0.1");
        assert_eq!(info.node_ip, "unknown");
    }

    #[test]
    fn values_pass_through_when_set() {
        let info = from_lookup(|name| match name {
            "KUBERNETES_NAMESPACE" => Some("staging".into()),
            "HOSTNAME" => Some("api-6d5f9-x2rm".into()),
            "POD_IP" => Some("10.244.1.17".into()),
            "NODE_IP" => Some("192.168.49.2".into()),
            _ => None,
        });
        assert_eq!(info.namespace, "staging");
        assert_eq!(info.pod_name, "api-6d5f9-x2rm");
        assert_eq!(info.pod_ip, "10.244.1.17");
        assert_eq!(info.node_ip, "192.168.49.2");
    }

    #[test]
    fn partial_environment_mixes_values_and_placeholders() {
        let info = from_lookup(|name| (name == "POD_IP").then(|| "10.0.0.9".to_string()));
        assert_eq!(info.pod_ip, "10.0.0.9");
        assert_eq!(info.namespace, "unknown");
        assert_eq!(info.pod_name, "local");
    }
}
