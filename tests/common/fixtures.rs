//! Reusable asset directory content

pub const AGENT_CONFIG: &str = r#"apiVersion: v1alpha1
metadata:
  name: ostest
  namespace: cluster0
spec:
  hosts:
    - hostname: master-0
      interfaces:
        - name: eth0
          macAddress: 52:54:01:aa:aa:a1
      networkConfig:
        interfaces:
          - name: eth0
            type: ethernet
            state: up
            ipv4:
              enabled: true
              address:
                - ip: 192.168.111.80
                  prefix-length: 24
    - hostname: master-1
      interfaces:
        - name: eth0
          macAddress: 52:54:01:bb:bb:b1
      networkConfig:
        interfaces:
          - name: eth0
            type: ethernet
            state: up
            ipv4:
              enabled: true
              address:
                - ip: 192.168.111.81
                  prefix-length: 24
"#;

pub const CLUSTER_IMAGE_SET: &str = r#"apiVersion: hive.openshift.io/v1
kind: ClusterImageSet
metadata:
  name: openshift-4.11
spec:
  releaseImage: quay.io/openshift-release-dev/ocp-release:4.11.0-x86_64
"#;

pub const PULL_SECRET: &str = r#"apiVersion: v1
kind: Secret
metadata:
  name: pull-secret
stringData:
  .dockerconfigjson: '{"auths":{"quay.io":{"auth":"c3VwZXI6c2VjcmV0"}}}'
"#;

pub const REGISTRIES_CONF: &str = r#"
[[registry]]
location = "quay.io/openshift-release-dev/ocp-release"

[[registry.mirror]]
location = "registry.local:5000/ocp-release"
"#;
